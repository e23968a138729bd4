//! Document persistence and serialization
//!
//! The transport form is JSON with two top-level members, `schema` (the
//! field list) and `global_settings`. Two channels share it:
//!
//! - the durable key-value store, where each member is written under its
//!   own key on every mutation and read once at start-up
//! - the file export/import, which uses the wrapped form with both members

pub mod file;
pub mod storage;

pub use file::{export_to_path, import_from_path};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStore};

use serde::Serialize;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::models::{Document, Field, GlobalSettings};

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(|e| EditorError::Storage(format!("serialization failed: {}", e)))
}

/// Encode the whole document in its wrapped transport form
pub fn serialize(document: &Document) -> Result<String> {
    to_json(document, true)
}

/// Decode a wrapped document; exact left inverse of [`serialize`]
///
/// Fails with `MalformedDocument` on any shape error. No partial recovery
/// is attempted.
pub fn deserialize(text: &str) -> Result<Document> {
    serde_json::from_str(text)
        .map_err(|e| EditorError::MalformedDocument(format!("document: {}", e)))
}

/// Write both halves of the document to the store under their own keys
///
/// Settings go first. If the schema write then fails, the previous settings
/// entry is restored so the store never pairs halves of different documents.
pub fn write_document(
    store: &mut dyn KeyValueStore,
    document: &Document,
    config: &EditorConfig,
) -> Result<()> {
    let schema = to_json(&document.fields(), config.pretty_storage)?;
    let settings = to_json(document.global_settings(), config.pretty_storage)?;

    let previous_settings = store.get(&config.global_settings_key)?;
    store.set(&config.global_settings_key, &settings)?;

    if let Err(e) = store.set(&config.schema_key, &schema) {
        let restored = match &previous_settings {
            Some(text) => store.set(&config.global_settings_key, text),
            None => store.remove(&config.global_settings_key),
        };
        if let Err(restore_err) = restored {
            log::warn!(
                "'{}' written without '{}'; restoring it failed: {}",
                config.global_settings_key,
                config.schema_key,
                restore_err
            );
        }
        return Err(e);
    }
    Ok(())
}

/// Read the document seeded from the store
///
/// Returns `Ok(None)` when the store holds neither half. A missing half
/// falls back to its default; a present but unparseable half is an error.
pub fn read_document(store: &dyn KeyValueStore, config: &EditorConfig) -> Result<Option<Document>> {
    let schema_text = store.get(&config.schema_key)?;
    let settings_text = store.get(&config.global_settings_key)?;

    if schema_text.is_none() && settings_text.is_none() {
        return Ok(None);
    }

    let defaults = Document::default();

    let schema: Vec<Field> = match schema_text {
        Some(text) => serde_json::from_str(&text)
            .map_err(|e| EditorError::MalformedDocument(format!("{}: {}", config.schema_key, e)))?,
        None => defaults.fields().to_vec(),
    };

    let settings: GlobalSettings = match settings_text {
        Some(text) => serde_json::from_str(&text).map_err(|e| {
            EditorError::MalformedDocument(format!("{}: {}", config.global_settings_key, e))
        })?,
        None => defaults.global_settings().clone(),
    };

    Ok(Some(Document::new(schema, settings)))
}

/// Remove every persisted entry
pub fn clear(store: &mut dyn KeyValueStore) -> Result<()> {
    store.clear()
}
