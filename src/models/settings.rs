//! Canvas-wide settings shared by every field

use serde::{Deserialize, Serialize};

use super::serde_helpers::deserialize_positive;

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;
pub const DEFAULT_CANVAS_STYLE: &str = ".banner {}";

/// Singleton settings record of a document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GlobalSettings {
    /// Free-form stylesheet text scoped to the canvas
    pub style: String,

    /// Extra class name applied to the canvas element
    #[serde(rename = "className", default)]
    pub class_name: String,

    /// Encoded image data or URL; `None` falls back to the plain background
    #[serde(rename = "pic", default)]
    pub background_image: Option<String>,

    #[serde(deserialize_with = "deserialize_positive")]
    pub width: u32,

    #[serde(deserialize_with = "deserialize_positive")]
    pub height: u32,
}

impl GlobalSettings {
    /// Background image to paint, ignoring empty strings
    pub fn visible_background(&self) -> Option<&str> {
        self.background_image.as_deref().filter(|pic| !pic.is_empty())
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            style: DEFAULT_CANVAS_STYLE.to_string(),
            class_name: String::new(),
            background_image: None,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_background_serializes_as_null() {
        let value = serde_json::to_value(GlobalSettings::default()).unwrap();
        assert_eq!(value["pic"], serde_json::Value::Null);
        assert_eq!(value["width"], json!(800));
        assert_eq!(value["className"], json!(""));
    }

    #[test]
    fn test_zero_width_rejected() {
        let result: Result<GlobalSettings, _> = serde_json::from_value(json!({
            "style": "", "pic": null, "width": 0, "height": 10
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_string_width_rejected() {
        let result: Result<GlobalSettings, _> = serde_json::from_value(json!({
            "style": "", "pic": null, "width": "800", "height": 800
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_pic_is_not_visible() {
        let settings = GlobalSettings {
            background_image: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(settings.visible_background(), None);
    }
}
