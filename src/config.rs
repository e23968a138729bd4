//! Editor configuration
//!
//! Passed from JavaScript to `initEditor` as an optional object; every
//! field falls back to its default when omitted.

use serde::{Deserialize, Serialize};

/// Durable-store key holding the field list
pub const SCHEMA_KEY: &str = "schema";
/// Durable-store key holding the global settings
pub const GLOBAL_SETTINGS_KEY: &str = "global_settings";
/// Suggested filename for the file export
pub const DEFAULT_EXPORT_FILE_NAME: &str = "data.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Store key for the serialized field list
    pub schema_key: String,

    /// Store key for the serialized global settings
    pub global_settings_key: String,

    /// Filename suggested to the user when exporting
    pub export_file_name: String,

    /// Pretty-print JSON written to the durable store
    pub pretty_storage: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            schema_key: SCHEMA_KEY.to_string(),
            global_settings_key: GLOBAL_SETTINGS_KEY.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            pretty_storage: true,
        }
    }
}
