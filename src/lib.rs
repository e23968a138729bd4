//! Banner Editor WASM Module
//!
//! Core of a visual banner editor: a document of positioned fields on a
//! fixed-size canvas, the mutation API that edits it, the drag positioning
//! engine, persistence to `localStorage` and JSON files, and the rendering
//! projection that the JavaScript view draws from.

pub mod api;
pub mod collaborators;
pub mod config;
pub mod drag;
pub mod editor;
pub mod error;
pub mod html_layout;
pub mod models;
pub mod persistence;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editor::{Direction, Editor, FieldAttribute, GlobalAttribute};
pub use error::{EditorError, Result};
pub use models::{Document, Field, FieldContent, FieldKind, GlobalSettings, Position};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {}", e)));
        }
    }

    log::info!("Banner Editor WASM module initialized");
}
