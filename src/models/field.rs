//! Field records: the positioned, typed elements placed on the canvas
//!
//! A field's meaningful shape depends on its type, so the type tag and the
//! value it governs live together in [`FieldContent`]. The remaining
//! attributes (key, position, class names, ...) are shared by all variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;

/// Field type discriminant (the `type` tag on the wire)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Textarea,
    Pic,
    Custom,
    /// Dormant variant: kept in the registry and wire format,
    /// not offered by the type picker.
    List,
}

impl FieldKind {
    /// Every variant the registry knows about
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Text,
        FieldKind::Textarea,
        FieldKind::Pic,
        FieldKind::Custom,
        FieldKind::List,
    ];

    /// Variants offered by the property editor's type picker
    pub const EDITABLE: [FieldKind; 4] = [
        FieldKind::Text,
        FieldKind::Textarea,
        FieldKind::Pic,
        FieldKind::Custom,
    ];

    /// Wire tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Pic => "pic",
            FieldKind::Custom => "custom",
            FieldKind::List => "list",
        }
    }

    /// Human-readable label for the type picker
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Textarea => "Textarea",
            FieldKind::Pic => "Pic",
            FieldKind::Custom => "Custom",
            FieldKind::List => "List",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EditorError::UnknownType(s.to_string()))
    }
}

/// Type tag together with the value shape it governs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldContent {
    /// Single-line text input
    Text { value: String },

    /// Multi-line text input
    Textarea { value: String },

    /// Image; `value` is a URL or data URL
    Pic { value: String },

    /// Raw markup inserted verbatim
    Custom { value: String },

    /// Bulleted or numbered list of strings
    List {
        value: Vec<String>,
        #[serde(rename = "isNumberIndex", default)]
        is_number_index: bool,
        #[serde(rename = "listClassName", default)]
        list_class_name: String,
    },
}

impl FieldContent {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldContent::Text { .. } => FieldKind::Text,
            FieldContent::Textarea { .. } => FieldKind::Textarea,
            FieldContent::Pic { .. } => FieldKind::Pic,
            FieldContent::Custom { .. } => FieldKind::Custom,
            FieldContent::List { .. } => FieldKind::List,
        }
    }

    /// The string value, for every variant except `List`
    pub fn text_value(&self) -> Option<&str> {
        match self {
            FieldContent::Text { value }
            | FieldContent::Textarea { value }
            | FieldContent::Pic { value }
            | FieldContent::Custom { value } => Some(value),
            FieldContent::List { .. } => None,
        }
    }
}

/// Top-left offset of a field within the canvas, in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One positioned element on the canvas
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Type tag and type-dependent value
    #[serde(flatten)]
    pub content: FieldContent,

    /// Identifier / placeholder label (uniqueness is not enforced)
    pub key: String,

    /// Optional caption rendered above the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Free-form stylesheet text scoped to this field
    pub style: String,

    pub pos: Position,

    #[serde(default)]
    pub container_class_name: String,

    #[serde(default)]
    pub label_class_name: String,

    #[serde(default)]
    pub item_class_name: String,

    /// Whether pointer-drag repositioning is enabled
    pub dragable: bool,
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        self.content.kind()
    }

    /// Label text when present and non-empty
    pub fn visible_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// Placeholder shown in empty inputs: the key, or a prompt built from the label
    pub fn placeholder(&self) -> String {
        if !self.key.is_empty() {
            self.key.clone()
        } else {
            format!("please input {}", self.label.as_deref().unwrap_or(""))
        }
    }
}
