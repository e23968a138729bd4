//! Error types for editor operations
//!
//! Every fallible operation of the mutation API and of the persistence layer
//! reports one of these. None of them leave the document partially mutated.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, EditorError>;

/// Top-level editor error type
#[derive(Debug, Error)]
pub enum EditorError {
    /// Field type tag is not one of the supported variants
    #[error("Unknown field type: '{0}'")]
    UnknownType(String),

    /// Field index outside the current field list
    #[error("Field index {index} out of range (field count: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Setter input does not match the attribute's semantic type
    #[error("Invalid value for attribute '{attribute}': {reason}")]
    InvalidAttributeValue { attribute: String, reason: String },

    /// Attribute name is not settable on this record
    #[error("Unknown attribute: '{0}'")]
    UnknownAttribute(String),

    /// Text could not be parsed as a document (or one of its halves)
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Durable store rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// File export/import I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EditorError {
    pub(crate) fn invalid_value(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        EditorError::InvalidAttributeValue {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        EditorError::MalformedDocument(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = EditorError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Field index 3 out of range (field count: 2)");
    }

    #[test]
    fn test_json_error_becomes_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EditorError = json_err.into();
        assert!(matches!(err, EditorError::MalformedDocument(_)));
    }
}
