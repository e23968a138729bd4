//! File-based export/import of the wrapped document form (native hosts)

use std::fs;
use std::path::Path;

use super::{deserialize, serialize};
use crate::error::Result;
use crate::models::Document;

/// Write the wrapped transport form to `path`
pub fn export_to_path(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let text = serialize(document)?;
    fs::write(path.as_ref(), text)?;
    log::info!("Exported document ({} fields) to {}", document.len(), path.as_ref().display());
    Ok(())
}

/// Read and parse a wrapped document from `path`
pub fn import_from_path(path: impl AsRef<Path>) -> Result<Document> {
    let text = fs::read_to_string(path.as_ref())?;
    deserialize(&text)
}
