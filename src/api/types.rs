//! Shared types for the WASM API
//!
//! This module contains common result types used across multiple API modules.

use serde::{Deserialize, Serialize};

use crate::drag::PositionUpdate;
use crate::html_layout::DisplayList;

/// Result of a file export: suggested filename plus the document text
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportedDocument {
    pub file_name: String,
    pub contents: String,
}

/// Result of a pointer-move sample
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DragMoveResult {
    /// Applied position change; `null` when nothing moved
    pub update: Option<PositionUpdate>,
    pub display_list: DisplayList,
}

/// Result of `addField`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AddFieldResult {
    pub index: usize,
    pub display_list: DisplayList,
}
