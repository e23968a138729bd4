//! Document-level layout computation
//!
//! This module contains the main entry point for layout calculations,
//! taking a document and producing a DisplayList.

use super::display_list::*;
use super::field::{class_list, FieldRenderBuilder};
use crate::models::Document;

/// Main layout engine for computing display lists
pub struct LayoutEngine {
    field_builder: FieldRenderBuilder,
}

impl LayoutEngine {
    /// Create a new layout engine
    pub fn new() -> Self {
        Self {
            field_builder: FieldRenderBuilder::new(),
        }
    }

    /// Compute complete layout for a document
    ///
    /// Pure projection: the same document always yields the same display list.
    ///
    /// # Arguments
    /// * `document` - The document to layout
    ///
    /// # Returns
    /// DisplayList with all positioning, classes, and rendering data
    pub fn compute_layout(&self, document: &Document) -> DisplayList {
        let settings = document.global_settings();

        let canvas = RenderCanvas {
            width: settings.width,
            height: settings.height,
            classes: class_list(&["banner"], &settings.class_name),
            style: settings.style.clone(),
            background_image: settings.visible_background().map(str::to_string),
        };

        let fields = document
            .fields()
            .iter()
            .enumerate()
            .map(|(index, field)| self.field_builder.build_render_field(field, index))
            .collect();

        DisplayList { canvas, fields }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{defaults_for, FieldKind, GlobalSettings};

    #[test]
    fn test_layout_preserves_field_order() {
        let doc = Document::new(
            vec![
                defaults_for(FieldKind::Pic),
                defaults_for(FieldKind::Text),
                defaults_for(FieldKind::Custom),
            ],
            GlobalSettings::default(),
        );

        let list = LayoutEngine::new().compute_layout(&doc);
        let kinds: Vec<_> = list
            .fields
            .iter()
            .map(|f| f.dataset["fieldType"].clone())
            .collect();
        assert_eq!(kinds, vec!["pic", "text", "custom"]);
        assert_eq!(list.fields[2].index, 2);
    }

    #[test]
    fn test_canvas_projection() {
        let settings = GlobalSettings {
            class_name: "promo".into(),
            background_image: Some("data:image/png;base64,AA".into()),
            width: 640,
            height: 320,
            ..Default::default()
        };
        let list = LayoutEngine::new().compute_layout(&Document::new(Vec::new(), settings));

        assert_eq!((list.canvas.width, list.canvas.height), (640, 320));
        assert_eq!(list.canvas.classes, vec!["banner", "promo"]);
        assert_eq!(list.canvas.background_image.as_deref(), Some("data:image/png;base64,AA"));
        assert!(list.fields.is_empty());
    }

    #[test]
    fn test_layout_is_pure() {
        let doc = Document::default();
        let engine = LayoutEngine::new();
        assert_eq!(engine.compute_layout(&doc), engine.compute_layout(&doc));
    }
}
