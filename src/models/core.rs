//! The banner document: global settings plus the ordered field list
//!
//! The document is the single source of truth for the canvas. Reads are
//! public; writes go through [`crate::editor::Editor`].

use serde::{Deserialize, Serialize};

use super::field::{Field, FieldKind};
use super::registry::defaults_for;
use super::settings::GlobalSettings;

/// Complete persisted unit of state
///
/// Field order is paint order (later fields draw on top) and list-display
/// order; there is no separate z-index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Document {
    schema: Vec<Field>,
    global_settings: GlobalSettings,
}

impl Document {
    pub fn new(schema: Vec<Field>, global_settings: GlobalSettings) -> Self {
        Self { schema, global_settings }
    }

    /// Ordered field list
    pub fn fields(&self) -> &[Field] {
        &self.schema
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.schema.get(index)
    }

    pub fn global_settings(&self) -> &GlobalSettings {
        &self.global_settings
    }

    pub fn len(&self) -> usize {
        self.schema.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.schema
    }

    pub(crate) fn global_settings_mut(&mut self) -> &mut GlobalSettings {
        &mut self.global_settings
    }
}

impl Default for Document {
    /// Canonical starting document: default settings and a single text field
    fn default() -> Self {
        Self {
            schema: vec![defaults_for(FieldKind::Text)],
            global_settings: GlobalSettings::default(),
        }
    }
}
