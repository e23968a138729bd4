//! Contracts with the external collaborators of the editor
//!
//! - the modal code editor used for stylesheet and markup text
//! - the rasterizer that turns the rendered canvas into an image at export
//!
//! Neither is implemented here. Their failures never reach the document;
//! they come back to the caller as [`Notification`]s.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language mode of a code editor session
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CodeLanguage {
    StyleSheet,
    Markup,
}

impl CodeLanguage {
    /// Language id understood by the code editing surface
    pub fn editor_language_id(&self) -> &'static str {
        match self {
            CodeLanguage::StyleSheet => "scss",
            CodeLanguage::Markup => "html",
        }
    }
}

/// What a confirmed code edit is applied to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "target", rename_all = "camelCase")]
pub enum EditTarget {
    GlobalStyle,
    FieldStyle { index: usize },
    /// Raw markup of a `custom` field
    FieldMarkup { index: usize },
}

impl EditTarget {
    pub fn language(&self) -> CodeLanguage {
        match self {
            EditTarget::GlobalStyle | EditTarget::FieldStyle { .. } => CodeLanguage::StyleSheet,
            EditTarget::FieldMarkup { .. } => CodeLanguage::Markup,
        }
    }
}

/// Transient state of an open code editor modal; never persisted
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeEditorSession {
    pub initial_text: String,
    pub language: CodeLanguage,
    pub target: EditTarget,
}

/// Converts the rendered canvas markup into image bytes
pub trait Rasterizer {
    fn rasterize(&self, html: &str) -> Result<Vec<u8>, String>;
}

/// Severity of a non-fatal notification
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Non-fatal message for the presentation layer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Info, message: message.into() }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_languages() {
        assert_eq!(EditTarget::GlobalStyle.language(), CodeLanguage::StyleSheet);
        assert_eq!(EditTarget::FieldMarkup { index: 0 }.language(), CodeLanguage::Markup);
        assert_eq!(CodeLanguage::Markup.editor_language_id(), "html");
    }

    #[test]
    fn test_session_wire_shape() {
        let session = CodeEditorSession {
            initial_text: ".banner {}".into(),
            language: CodeLanguage::StyleSheet,
            target: EditTarget::FieldStyle { index: 2 },
        };
        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            json!({
                "initialText": ".banner {}",
                "language": "style-sheet",
                "target": {"target": "fieldStyle", "index": 2}
            })
        );
    }
}
