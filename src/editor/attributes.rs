//! Generic attribute setters for fields and global settings
//!
//! Setter input arrives loosely typed (from a form or from JavaScript) as a
//! `serde_json::Value` and is checked against the attribute's semantic type
//! before anything is written.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::error::{EditorError, Result};
use crate::models::{Field, FieldContent, GlobalSettings, Position};

/// Settable attributes of a field
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldAttribute {
    Key,
    Label,
    Value,
    Style,
    ContainerClassName,
    LabelClassName,
    ItemClassName,
    /// List fields only
    ListClassName,
    /// List fields only
    IsNumberIndex,
    Dragable,
    Pos,
}

impl FieldAttribute {
    pub const ALL: [FieldAttribute; 11] = [
        FieldAttribute::Key,
        FieldAttribute::Label,
        FieldAttribute::Value,
        FieldAttribute::Style,
        FieldAttribute::ContainerClassName,
        FieldAttribute::LabelClassName,
        FieldAttribute::ItemClassName,
        FieldAttribute::ListClassName,
        FieldAttribute::IsNumberIndex,
        FieldAttribute::Dragable,
        FieldAttribute::Pos,
    ];

    /// Attribute name as it appears in the transport format
    pub fn name(&self) -> &'static str {
        match self {
            FieldAttribute::Key => "key",
            FieldAttribute::Label => "label",
            FieldAttribute::Value => "value",
            FieldAttribute::Style => "style",
            FieldAttribute::ContainerClassName => "containerClassName",
            FieldAttribute::LabelClassName => "labelClassName",
            FieldAttribute::ItemClassName => "itemClassName",
            FieldAttribute::ListClassName => "listClassName",
            FieldAttribute::IsNumberIndex => "isNumberIndex",
            FieldAttribute::Dragable => "dragable",
            FieldAttribute::Pos => "pos",
        }
    }
}

impl FromStr for FieldAttribute {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        FieldAttribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| EditorError::UnknownAttribute(s.to_string()))
    }
}

/// Settable attributes of the global settings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GlobalAttribute {
    Style,
    ClassName,
    /// Background image
    Pic,
    Width,
    Height,
}

impl GlobalAttribute {
    pub const ALL: [GlobalAttribute; 5] = [
        GlobalAttribute::Style,
        GlobalAttribute::ClassName,
        GlobalAttribute::Pic,
        GlobalAttribute::Width,
        GlobalAttribute::Height,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GlobalAttribute::Style => "style",
            GlobalAttribute::ClassName => "className",
            GlobalAttribute::Pic => "pic",
            GlobalAttribute::Width => "width",
            GlobalAttribute::Height => "height",
        }
    }
}

impl FromStr for GlobalAttribute {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        GlobalAttribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| EditorError::UnknownAttribute(s.to_string()))
    }
}

// ============================================================================
// Value checks
// ============================================================================

fn expect_string(attribute: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EditorError::invalid_value(attribute, format!("expected a string, got {}", value)))
}

fn expect_optional_string(attribute: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        other => expect_string(attribute, other).map(Some),
    }
}

fn expect_bool(attribute: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| EditorError::invalid_value(attribute, format!("expected a boolean, got {}", value)))
}

fn expect_positive(attribute: &str, value: &Value) -> Result<u32> {
    value
        .as_u64()
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            EditorError::invalid_value(attribute, format!("expected a positive integer, got {}", value))
        })
}

fn expect_string_list(attribute: &str, value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| EditorError::invalid_value(attribute, format!("expected an array, got {}", value)))?;
    items.iter().map(|item| expect_string(attribute, item)).collect()
}

fn expect_position(attribute: &str, value: &Value) -> Result<Position> {
    Position::deserialize(value).map_err(|e| {
        EditorError::invalid_value(attribute, format!("expected {{x, y}} with non-negative integers: {}", e))
    })
}

fn list_only(attribute: &str) -> EditorError {
    EditorError::invalid_value(attribute, "only list fields have this attribute")
}

// ============================================================================
// Setters
// ============================================================================

/// Check `value` and write it to `field`; on error `field` is untouched
pub(crate) fn apply_field_attribute(field: &mut Field, attribute: FieldAttribute, value: &Value) -> Result<()> {
    let name = attribute.name();
    match attribute {
        FieldAttribute::Key => field.key = expect_string(name, value)?,
        FieldAttribute::Label => field.label = expect_optional_string(name, value)?,
        FieldAttribute::Style => field.style = expect_string(name, value)?,
        FieldAttribute::ContainerClassName => field.container_class_name = expect_string(name, value)?,
        FieldAttribute::LabelClassName => field.label_class_name = expect_string(name, value)?,
        FieldAttribute::ItemClassName => field.item_class_name = expect_string(name, value)?,
        FieldAttribute::Dragable => field.dragable = expect_bool(name, value)?,
        FieldAttribute::Pos => field.pos = expect_position(name, value)?,
        FieldAttribute::Value => match &mut field.content {
            FieldContent::Text { value: v }
            | FieldContent::Textarea { value: v }
            | FieldContent::Pic { value: v }
            | FieldContent::Custom { value: v } => *v = expect_string(name, value)?,
            FieldContent::List { value: v, .. } => *v = expect_string_list(name, value)?,
        },
        FieldAttribute::ListClassName => match &mut field.content {
            FieldContent::List { list_class_name, .. } => *list_class_name = expect_string(name, value)?,
            _ => return Err(list_only(name)),
        },
        FieldAttribute::IsNumberIndex => match &mut field.content {
            FieldContent::List { is_number_index, .. } => *is_number_index = expect_bool(name, value)?,
            _ => return Err(list_only(name)),
        },
    }
    Ok(())
}

/// Check `value` and write it to `settings`; on error `settings` is untouched
pub(crate) fn apply_global_attribute(
    settings: &mut GlobalSettings,
    attribute: GlobalAttribute,
    value: &Value,
) -> Result<()> {
    let name = attribute.name();
    match attribute {
        GlobalAttribute::Style => settings.style = expect_string(name, value)?,
        GlobalAttribute::ClassName => settings.class_name = expect_string(name, value)?,
        GlobalAttribute::Pic => settings.background_image = expect_optional_string(name, value)?,
        GlobalAttribute::Width => settings.width = expect_positive(name, value)?,
        GlobalAttribute::Height => settings.height = expect_positive(name, value)?,
    }
    Ok(())
}
