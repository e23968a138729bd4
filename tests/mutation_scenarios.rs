// Mutation API scenarios: field list editing, retype, reordering and import

use banner_editor_wasm::models::registry::{default_content, default_style};
use banner_editor_wasm::persistence::MemoryStore;
use banner_editor_wasm::{Direction, Editor, EditorConfig, EditorError, FieldAttribute, FieldKind, Position};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn new_editor() -> Editor<MemoryStore> {
    Editor::new(MemoryStore::new(), EditorConfig::default())
}

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    prop::sample::select(FieldKind::ALL.to_vec())
}

#[test]
fn test_add_retype_remove_scenario() {
    let mut editor = new_editor();
    let settings = editor.document().global_settings();
    assert_eq!((settings.width, settings.height), (800, 800));
    assert_eq!(editor.document().fields()[0].pos, Position::new(100, 100));

    editor.add_field(FieldKind::Pic);
    assert_eq!(editor.document().len(), 2);

    editor.retype(1, FieldKind::Custom).unwrap();
    let field = &editor.document().fields()[1];
    assert_eq!(field.content, default_content(FieldKind::Custom));
    assert_eq!(field.style, default_style(FieldKind::Custom));
    let expected = field.clone();

    editor.remove_field(0).unwrap();
    assert_eq!(editor.document().len(), 1);
    assert_eq!(editor.document().fields()[0], expected);
}

#[test]
fn test_add_field_tag_defaults_and_unknown() {
    let mut editor = new_editor();
    assert_eq!(editor.add_field_tag("textarea").unwrap(), 1);
    assert!(matches!(editor.add_field_tag("marquee"), Err(EditorError::UnknownType(t)) if t == "marquee"));
    assert_eq!(editor.document().len(), 2);
}

#[test]
fn test_move_on_single_field_is_noop() {
    let mut editor = new_editor();
    let before = editor.document().clone();
    assert!(!editor.move_field(0, Direction::Up).unwrap());
    assert!(!editor.move_field(0, Direction::Down).unwrap());
    assert_eq!(editor.document(), &before);
}

#[test]
fn test_failed_import_keeps_document_bytes() {
    let mut editor = new_editor();
    editor.add_field(FieldKind::Custom);
    editor
        .set_field_attribute(1, FieldAttribute::Value, &json!("<em>sale</em>"))
        .unwrap();
    let before = editor.export_document().unwrap();

    for bad in ["", "[]", "{\"schema\": []}", "{\"schema\": [{}], \"global_settings\": {}}"] {
        assert!(editor.import_document(bad).is_err());
        assert_eq!(editor.export_document().unwrap(), before);
    }
}

#[test]
fn test_import_replaces_whole_document() {
    let mut source = new_editor();
    source.add_field(FieldKind::Pic);
    source.add_field(FieldKind::Textarea);
    let exported = source.export_document().unwrap();

    let mut target = new_editor();
    target.import_document(&exported).unwrap();
    assert_eq!(target.document(), source.document());
    assert_eq!(target.export_file_name(), "data.json");
}

#[test]
fn test_duplicate_keys_allowed() {
    let mut editor = new_editor();
    editor.add_field(FieldKind::Text);
    editor.set_field_attribute(0, FieldAttribute::Key, &json!("title")).unwrap();
    editor.set_field_attribute(1, FieldAttribute::Key, &json!("title")).unwrap();
    assert_eq!(editor.document().fields()[1].key, "title");
}

proptest! {
    #[test]
    fn prop_retype_preserves_non_value_attributes(
        from in kind_strategy(),
        to in kind_strategy(),
        key in "[a-z]{0,8}",
        x in 0u32..800,
        y in 0u32..800,
        dragable in any::<bool>(),
        class_name in "[a-z]{0,8}",
    ) {
        let mut editor = new_editor();
        editor.retype(0, from).unwrap();
        editor.set_field_attribute(0, FieldAttribute::Key, &json!(key)).unwrap();
        editor.set_field_attribute(0, FieldAttribute::Pos, &json!({"x": x, "y": y})).unwrap();
        editor.set_field_attribute(0, FieldAttribute::Dragable, &json!(dragable)).unwrap();
        editor.set_field_attribute(0, FieldAttribute::ContainerClassName, &json!(class_name)).unwrap();
        editor.set_field_attribute(0, FieldAttribute::LabelClassName, &json!(class_name)).unwrap();
        editor.set_field_attribute(0, FieldAttribute::ItemClassName, &json!(class_name)).unwrap();
        let before = editor.document().fields()[0].clone();

        editor.retype(0, to).unwrap();
        let after = &editor.document().fields()[0];

        prop_assert_eq!(&after.key, &before.key);
        prop_assert_eq!(after.pos, before.pos);
        prop_assert_eq!(after.dragable, before.dragable);
        prop_assert_eq!(&after.container_class_name, &before.container_class_name);
        prop_assert_eq!(&after.label_class_name, &before.label_class_name);
        prop_assert_eq!(&after.item_class_name, &before.item_class_name);
        prop_assert_eq!(&after.content, &default_content(to));
        prop_assert_eq!(after.style.as_str(), default_style(to));
    }

    #[test]
    fn prop_move_down_then_up_is_identity(
        kinds in prop::collection::vec(kind_strategy(), 2..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut editor = new_editor();
        for kind in &kinds {
            editor.add_field(*kind);
        }
        let len = editor.document().len();
        // interior indices only: 1 <= i < len - 1
        let i = 1 + pick.index(len - 2);
        let before = editor.document().clone();

        prop_assert!(editor.move_field(i, Direction::Down).unwrap());
        prop_assert!(editor.move_field(i + 1, Direction::Up).unwrap());
        prop_assert_eq!(editor.document(), &before);
    }
}
