//! Banner Editor WASM API
//!
//! This module provides the JavaScript-facing API for the banner editor.
//! It includes shared utilities for serialization, error handling and
//! logging, as well as the API functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: Result objects returned to JavaScript
//! - `core`: Editor lifecycle, field list, attributes and the code editor flow
//! - `drag`: Pointer gesture forwarding
//! - `export`: Document file channel and image export

pub mod helpers;
pub mod types;
pub mod core;
pub mod drag;
pub mod export;

// Re-export all public functions to keep one flat API surface
pub use self::core::*;
pub use self::drag::{drag_cancel, drag_end, drag_move, drag_start};
pub use self::export::{export_document, export_file_name, export_image, import_document, render_export_markup};
