//! Models module for the Banner Editor
//!
//! This module contains the document model: the field record and its
//! type-dependent content, the canvas-wide settings and the registry of
//! per-type defaults.

pub mod core;
pub mod field;
pub mod registry;
pub mod serde_helpers;
pub mod settings;

// Re-export commonly used types
pub use self::core::Document;
pub use field::{Field, FieldContent, FieldKind, Position};
pub use registry::{defaults_for, defaults_for_tag};
pub use settings::GlobalSettings;
