//! Core WASM API: editor lifecycle, field list and attribute mutations
//!
//! The editor lives in a process-wide mutex. Every exported function locks
//! it for the whole call, so mutations from JavaScript never interleave.
//! Mutating calls return the fresh display list for the caller to render.

use lazy_static::lazy_static;
use serde_json::Value;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize, to_js_error, validation_error};
use super::types::AddFieldResult;
use crate::collaborators::{CodeEditorSession, EditTarget};
use crate::config::EditorConfig;
use crate::editor::{Direction, Editor};
use crate::models::FieldKind;
use crate::persistence::BrowserStorage;
use crate::{wasm_info, wasm_log};

// WASM-owned editor (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<Option<Editor<BrowserStorage>>> = Mutex::new(None);
}

/// Run `f` against the initialized editor
pub(crate) fn with_editor<T>(
    f: impl FnOnce(&mut Editor<BrowserStorage>) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    let mut guard = EDITOR
        .lock()
        .map_err(|_| validation_error("Editor lock poisoned"))?;
    let editor = guard
        .as_mut()
        .ok_or_else(|| validation_error("Editor not initialized; call initEditor first"))?;
    f(editor)
}

/// Display list of the editor's current document, serialized for JS
pub(crate) fn display_list_js(editor: &Editor<BrowserStorage>) -> Result<JsValue, JsValue> {
    serialize(&editor.display_list(), "DisplayList serialization error")
}

/// Create the editor, seeded from `localStorage`
///
/// # Parameters
/// - `config_js`: optional `EditorConfig` object; omitted keys use defaults
///
/// # Returns
/// DisplayList of the loaded document
#[wasm_bindgen(js_name = initEditor)]
pub fn init_editor(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: EditorConfig = if config_js.is_undefined() || config_js.is_null() {
        EditorConfig::default()
    } else {
        deserialize(config_js, "Invalid editor config")?
    };

    let editor = Editor::open_or_default(BrowserStorage, config);
    wasm_info!("initEditor: {} field(s) loaded", editor.document().len());
    let list = display_list_js(&editor)?;

    let mut guard = EDITOR
        .lock()
        .map_err(|_| validation_error("Editor lock poisoned"))?;
    *guard = Some(editor);
    Ok(list)
}

/// Current document in its transport form
#[wasm_bindgen(js_name = getDocument)]
pub fn get_document() -> Result<JsValue, JsValue> {
    with_editor(|editor| serialize(editor.document(), "Document serialization error"))
}

/// Rendering projection of the current document
#[wasm_bindgen(js_name = getDisplayList)]
pub fn get_display_list() -> Result<JsValue, JsValue> {
    with_editor(|editor| display_list_js(editor))
}

/// Field types offered by the type picker, as `{value, label}` pairs
#[wasm_bindgen(js_name = getFieldTypes)]
pub fn get_field_types() -> Result<JsValue, JsValue> {
    let options: Vec<Value> = FieldKind::EDITABLE
        .iter()
        .map(|kind| serde_json::json!({ "value": kind.as_str(), "label": kind.label() }))
        .collect();
    serialize(&options, "Field type serialization error")
}

/// Append a field of the given type (default `text`)
///
/// # Returns
/// `{index, display_list}` with the index of the new field
#[wasm_bindgen(js_name = addField)]
pub fn add_field(field_type: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("addField called: type={:?}", field_type);
    with_editor(|editor| {
        let index = match field_type.as_deref() {
            Some(tag) => editor.add_field_tag(tag).map_err(to_js_error)?,
            None => editor.add_field(FieldKind::default()),
        };
        let result = AddFieldResult { index, display_list: editor.display_list() };
        serialize(&result, "AddFieldResult serialization error")
    })
}

#[wasm_bindgen(js_name = removeField)]
pub fn remove_field(index: usize) -> Result<JsValue, JsValue> {
    wasm_info!("removeField called: index={}", index);
    with_editor(|editor| {
        editor.remove_field(index).map_err(to_js_error)?;
        display_list_js(editor)
    })
}

/// Swap a field with its neighbour
///
/// # Parameters
/// - `index`: field to move
/// - `direction`: `"up"` or `"down"`
#[wasm_bindgen(js_name = moveField)]
pub fn move_field(index: usize, direction: &str) -> Result<JsValue, JsValue> {
    wasm_info!("moveField called: index={}, direction={}", index, direction);
    with_editor(|editor| {
        let direction: Direction = direction.parse().map_err(to_js_error)?;
        let moved = editor.move_field(index, direction).map_err(to_js_error)?;
        if !moved {
            wasm_log!("  field {} already at the {:?} boundary", index, direction);
        }
        display_list_js(editor)
    })
}

#[wasm_bindgen(js_name = retypeField)]
pub fn retype_field(index: usize, field_type: &str) -> Result<JsValue, JsValue> {
    wasm_info!("retypeField called: index={}, type={}", index, field_type);
    with_editor(|editor| {
        editor.retype_tag(index, field_type).map_err(to_js_error)?;
        display_list_js(editor)
    })
}

/// Set one field attribute
///
/// # Parameters
/// - `index`: field index
/// - `attribute`: transport name, e.g. `"containerClassName"`
/// - `value_js`: new value; its type must match the attribute
#[wasm_bindgen(js_name = setFieldAttribute)]
pub fn set_field_attribute(index: usize, attribute: &str, value_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_log!("setFieldAttribute called: index={}, attribute={}", index, attribute);
    let value: Value = deserialize(value_js, "Invalid attribute value")?;
    with_editor(|editor| {
        editor
            .set_field_attribute_by_name(index, attribute, &value)
            .map_err(to_js_error)?;
        display_list_js(editor)
    })
}

#[wasm_bindgen(js_name = setGlobalAttribute)]
pub fn set_global_attribute(attribute: &str, value_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_log!("setGlobalAttribute called: attribute={}", attribute);
    let value: Value = deserialize(value_js, "Invalid attribute value")?;
    with_editor(|editor| {
        editor
            .set_global_attribute_by_name(attribute, &value)
            .map_err(to_js_error)?;
        display_list_js(editor)
    })
}

/// Clear `localStorage` and restore the default document
#[wasm_bindgen(js_name = resetDocument)]
pub fn reset_document() -> Result<JsValue, JsValue> {
    wasm_info!("resetDocument called");
    with_editor(|editor| {
        editor.reset_document();
        display_list_js(editor)
    })
}

#[wasm_bindgen(js_name = saveDocument)]
pub fn save_document() -> Result<(), JsValue> {
    with_editor(|editor| editor.save().map_err(to_js_error))
}

// ============================================================================
// Code editor
// ============================================================================

/// Open a code editor session
///
/// # Parameters
/// - `target_js`: `{target: "globalStyle"}`, `{target: "fieldStyle", index}`
///   or `{target: "fieldMarkup", index}`
///
/// # Returns
/// `CodeEditorSession` with the initial text and language mode
#[wasm_bindgen(js_name = openCodeEditor)]
pub fn open_code_editor(target_js: JsValue) -> Result<JsValue, JsValue> {
    let target: EditTarget = deserialize(target_js, "Invalid edit target")?;
    wasm_log!("openCodeEditor called: {:?}", target);
    with_editor(|editor| {
        let session = editor.open_code_editor(target).map_err(to_js_error)?;
        serialize(&session, "CodeEditorSession serialization error")
    })
}

/// Language id for the code editing surface of a session
#[wasm_bindgen(js_name = codeEditorLanguage)]
pub fn code_editor_language(session_js: JsValue) -> Result<String, JsValue> {
    let session: CodeEditorSession = deserialize(session_js, "Invalid code editor session")?;
    Ok(session.language.editor_language_id().to_string())
}

/// Apply the confirmed text of a session to its target
#[wasm_bindgen(js_name = confirmCodeEdit)]
pub fn confirm_code_edit(session_js: JsValue, final_text: &str) -> Result<JsValue, JsValue> {
    let session: CodeEditorSession = deserialize(session_js, "Invalid code editor session")?;
    wasm_info!("confirmCodeEdit called: {:?}", session.target);
    with_editor(|editor| {
        editor.confirm_code_edit(&session, final_text).map_err(to_js_error)?;
        display_list_js(editor)
    })
}
