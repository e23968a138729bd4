//! WASM API test
//!
//! Exercises the JavaScript-facing functions against the browser's
//! `localStorage`. Runs under `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use banner_editor_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field_count(display_list: &JsValue) -> u32 {
    let fields = js_sys::Reflect::get(display_list, &JsValue::from_str("fields")).unwrap();
    js_sys::Array::from(&fields).length()
}

fn fresh_editor() -> JsValue {
    init_editor(JsValue::UNDEFINED).unwrap();
    reset_document().unwrap()
}

#[wasm_bindgen_test]
fn test_init_and_reset() {
    let list = fresh_editor();
    assert_eq!(field_count(&list), 1);
}

#[wasm_bindgen_test]
fn test_add_and_remove_field() {
    fresh_editor();
    let result = add_field(Some("pic".to_string())).unwrap();
    let index = js_sys::Reflect::get(&result, &JsValue::from_str("index")).unwrap();
    assert_eq!(index.as_f64(), Some(1.0));

    let list = remove_field(0).unwrap();
    assert_eq!(field_count(&list), 1);
    assert!(remove_field(5).is_err());
}

#[wasm_bindgen_test]
fn test_unknown_type_rejected() {
    fresh_editor();
    assert!(add_field(Some("video".to_string())).is_err());
    assert!(retype_field(0, "video").is_err());
}

#[wasm_bindgen_test]
fn test_attribute_setters() {
    fresh_editor();
    assert!(set_field_attribute(0, "key", JsValue::from_str("headline")).is_ok());
    assert!(set_field_attribute(0, "dragable", JsValue::from_str("yes")).is_err());
    assert!(set_global_attribute("width", JsValue::from_f64(640.0)).is_ok());
    assert!(set_global_attribute("width", JsValue::from_f64(0.0)).is_err());
}

#[wasm_bindgen_test]
fn test_export_import_roundtrip() {
    fresh_editor();
    add_field(Some("textarea".to_string())).unwrap();
    let exported = export_document().unwrap();
    let contents = js_sys::Reflect::get(&exported, &JsValue::from_str("contents"))
        .unwrap()
        .as_string()
        .unwrap();
    assert_eq!(export_file_name().unwrap(), "data.json");

    reset_document().unwrap();
    let list = import_document(&contents).unwrap();
    assert_eq!(field_count(&list), 2);
    assert!(import_document("{ broken").is_err());
}

#[wasm_bindgen_test]
fn test_drag_gesture() {
    fresh_editor();
    assert!(drag_start(0).unwrap());
    assert!(drag_move(25.0, 0.0, 50, 50).is_ok());
    drag_end().unwrap();

    let doc = get_document().unwrap();
    let schema = js_sys::Reflect::get(&doc, &JsValue::from_str("schema")).unwrap();
    let field = js_sys::Array::from(&schema).get(0);
    let pos = js_sys::Reflect::get(&field, &JsValue::from_str("pos")).unwrap();
    let x = js_sys::Reflect::get(&pos, &JsValue::from_str("x")).unwrap();
    assert_eq!(x.as_f64(), Some(125.0));
}
