//! Browser tests for the JavaScript surface. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use serde::Serialize;
use studio_wasm::{generate_screen_code_standalone, get_required_files, StudioEngine};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn nodes_js(json: &str) -> JsValue {
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

#[wasm_bindgen_test]
fn add_and_generate() {
    let mut engine = StudioEngine::new();
    assert!(engine.add_node("input-email").is_ok());
    assert!(engine.add_node("hologram").is_err());
    assert!(engine.add_node("rainbow-button").is_ok());

    engine
        .set_prop("node_0", "required", JsValue::from_bool(true))
        .unwrap();
    let code = engine.generate_screen_code("Contact");
    assert!(code.contains("if (!email.trim()) {"));
}

#[wasm_bindgen_test]
fn set_prop_unknown_node_fails() {
    let mut engine = StudioEngine::new();
    assert!(engine
        .set_prop("node_9", "label", JsValue::from_str("Name"))
        .is_err());
}

#[wasm_bindgen_test]
fn standalone_functions() {
    let nodes = nodes_js(
        r#"[
            {"id": "a", "type": "input-text", "props": {"label": "Full Name"}, "order": 0},
            {"id": "b", "type": "date-picker", "props": {}, "order": 1}
        ]"#,
    );
    let code = generate_screen_code_standalone(nodes.clone(), "Profile").unwrap();
    assert!(code.contains("export default function Profile() {"));

    let files = get_required_files(nodes).unwrap();
    assert_eq!(files, vec!["CustomInput.tsx", "DatePicker.tsx"]);
}

#[wasm_bindgen_test]
fn required_file_shapes() {
    let mut engine = StudioEngine::new();
    assert!(engine.add_node("input-text").is_ok());
    assert!(engine.add_node("heading").is_ok());
    assert!(engine.add_node("input-email").is_ok());

    assert_eq!(engine.required_files(), vec!["CustomInput"]);
    assert_eq!(engine.required_file_names(), vec!["CustomInput.tsx"]);

    let nodes = nodes_js(r#"[{"id": "a", "type": "input-text", "props": {}, "order": 0}]"#);
    assert_eq!(get_required_files(nodes).unwrap(), engine.required_file_names());
}
