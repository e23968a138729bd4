//! Export operations for the WASM API
//!
//! This module provides the file channel and the image export:
//! - Document JSON: the wrapped `{schema, global_settings}` form for download
//! - Import: atomic replacement of the whole document from uploaded text
//! - Markup: the static HTML of the canvas
//! - Image: the markup handed to a JavaScript rasterizer callback

use wasm_bindgen::prelude::*;

use super::core::{display_list_js, with_editor};
use super::helpers::{serialize, to_js_error};
use super::types::ExportedDocument;
use crate::collaborators::Rasterizer;
use crate::{wasm_info, wasm_warn};

// ============================================================================
// Document file channel
// ============================================================================

/// Export the document for download
///
/// # Returns
/// `{file_name, contents}` with the suggested filename (`data.json` unless
/// configured) and the pretty-printed document JSON
#[wasm_bindgen(js_name = exportDocument)]
pub fn export_document() -> Result<JsValue, JsValue> {
    wasm_info!("exportDocument called");
    with_editor(|editor| {
        let contents = editor.export_document().map_err(to_js_error)?;
        wasm_info!("  document exported: {} bytes", contents.len());
        let exported = ExportedDocument {
            file_name: editor.export_file_name().to_string(),
            contents,
        };
        serialize(&exported, "ExportedDocument serialization error")
    })
}

/// Suggested filename for the document export
#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name() -> Result<String, JsValue> {
    with_editor(|editor| Ok(editor.export_file_name().to_string()))
}

/// Replace the whole document with uploaded JSON text
///
/// Malformed input is rejected and the current document is kept.
#[wasm_bindgen(js_name = importDocument)]
pub fn import_document(text: &str) -> Result<JsValue, JsValue> {
    wasm_info!("importDocument called: {} bytes", text.len());
    with_editor(|editor| {
        editor.import_document(text).map_err(to_js_error)?;
        wasm_info!("  imported {} field(s)", editor.document().len());
        display_list_js(editor)
    })
}

// ============================================================================
// Image export
// ============================================================================

/// Static HTML of the canvas, as handed to the rasterizer
#[wasm_bindgen(js_name = renderExportMarkup)]
pub fn render_export_markup() -> Result<String, JsValue> {
    with_editor(|editor| Ok(editor.export_markup()))
}

/// Rasterizer backed by a JavaScript callback `(html) => Uint8Array`
struct JsRasterizer<'a> {
    callback: &'a js_sys::Function,
}

impl Rasterizer for JsRasterizer<'_> {
    fn rasterize(&self, html: &str) -> Result<Vec<u8>, String> {
        let output = self
            .callback
            .call1(&JsValue::NULL, &JsValue::from_str(html))
            .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))?;
        output
            .dyn_ref::<js_sys::Uint8Array>()
            .map(js_sys::Uint8Array::to_vec)
            .ok_or_else(|| "rasterizer did not return a Uint8Array".to_string())
    }
}

/// Rasterize the canvas through `rasterize`
///
/// # Returns
/// The image bytes as a `Uint8Array`. A failed rasterization rejects with a
/// `{level, message}` notification object and leaves the document untouched.
#[wasm_bindgen(js_name = exportImage)]
pub fn export_image(rasterize: &js_sys::Function) -> Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("exportImage called");
    with_editor(|editor| {
        let rasterizer = JsRasterizer { callback: rasterize };
        match editor.export_image(&rasterizer) {
            Ok(bytes) => {
                wasm_info!("  image exported: {} bytes", bytes.len());
                Ok(js_sys::Uint8Array::from(bytes.as_slice()))
            }
            Err(notification) => {
                wasm_warn!("  image export failed: {}", notification);
                Err(serialize(&notification, "Notification serialization error")?)
            }
        }
    })
}
