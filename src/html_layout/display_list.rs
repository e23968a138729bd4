//! Display List for Canvas Rendering
//!
//! This module defines the output structure returned from the layout engine to JavaScript.
//! The DisplayList contains every position, class list and content string the
//! presentation layer needs to draw the banner without inspecting the document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level display list: the canvas and its fields in paint order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    pub canvas: RenderCanvas,

    /// Fields in list order (later entries paint on top)
    pub fields: Vec<RenderField>,
}

/// The fixed-size canvas element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderCanvas {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// CSS class names to apply
    pub classes: Vec<String>,

    /// Stylesheet text scoped to the canvas (opaque)
    pub style: String,

    /// Background image source; `None` means the fallback background
    pub background_image: Option<String>,
}

/// One positioned field container
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderField {
    /// Index in the document's field list
    pub index: usize,

    /// X position (left edge) within the canvas
    pub left: u32,

    /// Y position (top edge) within the canvas
    pub top: u32,

    /// Whether the drag engine should be attached to this container
    pub draggable: bool,

    /// Scope identifier the field's stylesheet is attached to
    pub scope: String,

    /// Stylesheet text scoped to this field (opaque)
    pub style: String,

    /// CSS class names of the container
    pub classes: Vec<String>,

    /// Data attributes (data-* attributes)
    pub dataset: BTreeMap<String, String>,

    /// Caption, only when the field has a non-empty label
    pub label: Option<RenderLabel>,

    /// Type-specific content
    pub item: RenderItem,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderLabel {
    pub text: String,
    pub classes: Vec<String>,
}

/// Type-specific content of a field
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderItem {
    /// Single-line input
    Input {
        value: String,
        placeholder: String,
        classes: Vec<String>,
    },

    /// Multi-line input
    TextArea {
        value: String,
        placeholder: String,
        classes: Vec<String>,
    },

    /// Image element
    Image { src: String, classes: Vec<String> },

    /// Raw markup inserted verbatim
    Markup { html: String, classes: Vec<String> },

    /// Ordered or unordered list
    List {
        ordered: bool,
        classes: Vec<String>,
        items: Vec<RenderListItem>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderListItem {
    pub text: String,
    pub classes: Vec<String>,
}
