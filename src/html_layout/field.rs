//! Field-level layout and styling
//!
//! This module handles CSS class generation, data attribute building and the
//! per-type content selection for individual fields.

use std::collections::BTreeMap;

use super::display_list::*;
use crate::models::{Field, FieldContent};

/// Base class names followed by the whitespace-separated user class names
pub(crate) fn class_list(base: &[&str], extra: &str) -> Vec<String> {
    base.iter()
        .map(|c| c.to_string())
        .chain(extra.split_whitespace().map(str::to_string))
        .collect()
}

/// Builder for field styling and layout
pub struct FieldRenderBuilder;

impl FieldRenderBuilder {
    /// Create a new field render builder
    pub fn new() -> Self {
        Self
    }

    /// Build a complete RenderField with all styling and positioning
    pub fn build_render_field(&self, field: &Field, index: usize) -> RenderField {
        let classes = class_list(&["field-container"], &field.container_class_name);

        let mut dataset = BTreeMap::new();
        dataset.insert("fieldIndex".to_string(), index.to_string());
        dataset.insert("fieldType".to_string(), field.kind().as_str().to_string());
        if !field.key.is_empty() {
            dataset.insert("fieldKey".to_string(), field.key.clone());
        }

        let label = field.visible_label().map(|text| RenderLabel {
            text: text.to_string(),
            classes: class_list(&["label"], &field.label_class_name),
        });

        RenderField {
            index,
            left: field.pos.x,
            top: field.pos.y,
            draggable: field.dragable,
            scope: format!("field-{}", index),
            style: field.style.clone(),
            classes,
            dataset,
            label,
            item: self.build_item(field),
        }
    }

    /// Select the item markup for the field's type
    fn build_item(&self, field: &Field) -> RenderItem {
        let extra = field.item_class_name.as_str();
        match &field.content {
            FieldContent::Text { value } => RenderItem::Input {
                value: value.clone(),
                placeholder: field.placeholder(),
                classes: class_list(&["input", "is-static"], extra),
            },
            FieldContent::Textarea { value } => RenderItem::TextArea {
                value: value.clone(),
                placeholder: field.placeholder(),
                classes: class_list(&["textarea"], extra),
            },
            FieldContent::Pic { value } => RenderItem::Image {
                src: value.clone(),
                classes: class_list(&["pic"], extra),
            },
            FieldContent::Custom { value } => RenderItem::Markup {
                html: value.clone(),
                classes: class_list(&["container"], extra),
            },
            FieldContent::List { value, is_number_index, list_class_name } => RenderItem::List {
                ordered: *is_number_index,
                classes: class_list(&[], list_class_name),
                items: value
                    .iter()
                    .map(|text| RenderListItem {
                        text: text.clone(),
                        classes: class_list(&[], extra),
                    })
                    .collect(),
            },
        }
    }
}

impl Default for FieldRenderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
