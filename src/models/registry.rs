//! Field type registry
//!
//! Canonical starting records per field type. Both lookups are exhaustive
//! matches, so adding a [`FieldKind`] variant will not compile until its
//! defaults exist here.

use super::field::{Field, FieldContent, FieldKind, Position};
use crate::error::Result;

/// Initial position of every newly created field
pub const DEFAULT_POSITION: Position = Position { x: 100, y: 100 };

/// Default stylesheet text seeded into a field of the given kind
pub fn default_style(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => ".field-container {\r\n    .input {}\r\n}",
        FieldKind::Textarea => ".field-container {\r\n    .textarea {}\r\n}",
        FieldKind::Pic => ".field-container {\r\n    .pic { }\r\n}",
        FieldKind::Custom => ".field-container {\r\n    .container {}\r\n}",
        FieldKind::List => ".field-container {\r\n    ul {}\r\n    ol {}\r\n    li {}\r\n}",
    }
}

/// Default type-dependent content for the given kind
pub fn default_content(kind: FieldKind) -> FieldContent {
    match kind {
        FieldKind::Text => FieldContent::Text { value: String::new() },
        FieldKind::Textarea => FieldContent::Textarea { value: String::new() },
        FieldKind::Pic => FieldContent::Pic { value: String::new() },
        FieldKind::Custom => FieldContent::Custom { value: String::new() },
        FieldKind::List => FieldContent::List {
            value: Vec::new(),
            is_number_index: false,
            list_class_name: String::new(),
        },
    }
}

/// A fresh, fully-populated field of the given kind
///
/// Every call builds a new owned record; nothing is shared between fields.
pub fn defaults_for(kind: FieldKind) -> Field {
    Field {
        content: default_content(kind),
        key: String::new(),
        label: None,
        style: default_style(kind).to_string(),
        pos: DEFAULT_POSITION,
        container_class_name: String::new(),
        label_class_name: String::new(),
        item_class_name: String::new(),
        dragable: true,
    }
}

/// Same as [`defaults_for`], resolving the kind from its wire tag
pub fn defaults_for_tag(tag: &str) -> Result<Field> {
    Ok(defaults_for(tag.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;

    #[test]
    fn test_defaults_are_type_seeded() {
        for kind in FieldKind::ALL {
            let field = defaults_for(kind);
            assert_eq!(field.kind(), kind);
            assert_eq!(field.style, default_style(kind));
            assert_eq!(field.pos, Position::new(100, 100));
            assert!(field.dragable);
            assert!(field.key.is_empty());
            assert!(field.label.is_none());
        }
    }

    #[test]
    fn test_defaults_are_independent() {
        let mut first = defaults_for(FieldKind::List);
        if let FieldContent::List { value, .. } = &mut first.content {
            value.push("leaked?".into());
        }
        first.pos.x = 5;

        let second = defaults_for(FieldKind::List);
        assert_eq!(second.content, default_content(FieldKind::List));
        assert_eq!(second.pos, DEFAULT_POSITION);
    }

    #[test]
    fn test_defaults_idempotent() {
        assert_eq!(defaults_for(FieldKind::Custom), defaults_for(FieldKind::Custom));
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(defaults_for_tag("video"), Err(EditorError::UnknownType(_))));
        assert_eq!(defaults_for_tag("textarea").unwrap().kind(), FieldKind::Textarea);
    }
}
