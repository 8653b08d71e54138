//! End-to-end screen generation scenarios.

use studio_codegen::{generate_screen_code, required_files, GeneratorConfig, ScreenGenerator};
use studio_core::{Canvas, CanvasNode};
use studio_registry::{Category, DefinitionBuilder, DefinitionRegistry, JsxTemplate, StateType};

fn node(id: &str, component_type: &str, order: i64) -> CanvasNode {
    CanvasNode::new(id, component_type, order)
}

const SIGN_UP: &str = r#"import React, { useState } from 'react';
import { View, ScrollView, StyleSheet, Text, KeyboardAvoidingView, Platform, Alert } from 'react-native';
import { SafeAreaProvider } from 'react-native-safe-area-context';

import CustomInput from './CustomInput';
import RainbowButton from './RainbowButton';

export default function SignUpScreen() {
  const [fullName, setFullName] = useState('');
  const [fullNameError, setFullNameError] = useState('');

  const handleSubmit = () => {
    let isValid = true;

    setFullNameError('');

    if (!fullName.trim()) {
      setFullNameError('This field is required');
      isValid = false;
    }

    if (!isValid) return;

    Alert.alert('Success', 'Form submitted successfully!');
  };

  return (
    <SafeAreaProvider>
      <KeyboardAvoidingView
        style={styles.keyboardAvoiding}
        behavior={Platform.OS === 'ios' ? 'padding' : 'height'}
      >
        <ScrollView style={styles.container} keyboardShouldPersistTaps="handled">
          <CustomInput
            label="Full Name"
            value={fullName}
            onChangeText={setFullName}
            required
            error={fullNameError}
          />
          <View style={{ alignItems: 'center', width: '100%' }}>
            <RainbowButton width={320} height={50} onPress={handleSubmit}>
              <Text style={styles.buttonText}>Submit</Text>
            </RainbowButton>
          </View>
        </ScrollView>
      </KeyboardAvoidingView>
    </SafeAreaProvider>
  );
}

const styles = StyleSheet.create({
  keyboardAvoiding: {
    flex: 1,
    backgroundColor: '#fff',
  },
  container: {
    flex: 1,
    padding: 20,
  },
  buttonText: {
    color: '#fff',
    fontSize: 16,
    fontWeight: '600',
  },
});
"#;

#[test]
fn test_empty_canvas_returns_placeholder() {
    assert_eq!(
        generate_screen_code(&[], "MyScreen"),
        "// Drag components onto the canvas to generate code"
    );
}

#[test]
fn test_full_sign_up_screen() {
    // Explicit props chosen so the input renders with no optional attributes.
    let nodes = vec![
        node("node_0", "input-text", 0)
            .with_prop("label", "Full Name")
            .with_prop("placeholder", "")
            .with_prop("variant", "default")
            .with_prop("required", true),
        node("node_1", "rainbow-button", 1),
    ];
    assert_eq!(generate_screen_code(&nodes, "SignUpScreen"), SIGN_UP);
}

#[test]
fn test_required_text_field_is_validated() {
    let nodes = vec![
        node("node_0", "input-text", 0)
            .with_prop("label", "Full Name")
            .with_prop("required", true),
        node("node_1", "rainbow-button", 1),
    ];
    let code = generate_screen_code(&nodes, "SignUpScreen");

    assert!(code.contains("const [fullName, setFullName] = useState('');"));
    assert!(code.contains("const [fullNameError, setFullNameError] = useState('');"));

    let check = code.find("if (!fullName.trim()) {").unwrap();
    let success = code.find("Alert.alert('Success'").unwrap();
    assert!(check < success);
}

#[test]
fn test_duplicate_labels_are_disambiguated() {
    let nodes = vec![
        node("node_0", "input-email", 0).with_prop("label", "Email"),
        node("node_1", "input-email", 1).with_prop("label", "Email"),
    ];
    let code = generate_screen_code(&nodes, "Contact");

    assert!(code.contains("const [email, setEmail] = useState('');"));
    assert!(code.contains("const [email1, setEmail1] = useState('');"));
    assert!(code.contains("value={email1}"));
}

#[test]
fn test_suffix_follows_sorted_order() {
    let nodes = vec![
        node("node_0", "input-email", 5).with_prop("label", "Email"),
        node("node_1", "input-email", 1).with_prop("label", "Email"),
        node("node_2", "heading", 5).with_prop("text", "Tied"),
    ];
    let code = generate_screen_code(&nodes, "Contact");

    let first = code.find("const [email, setEmail]").unwrap();
    let second = code.find("const [email1, setEmail1]").unwrap();
    assert!(first < second);

    // node_1 sorts first and keeps the bare name.
    let bare = code.find("value={email}").unwrap();
    let suffixed = code.find("value={email1}").unwrap();
    let tied = code.find(">Tied</Text>").unwrap();
    assert!(bare < suffixed);
    assert!(suffixed < tied);
}

#[test]
fn test_equal_order_keeps_source_order() {
    let nodes = vec![
        node("node_0", "heading", 3).with_prop("text", "Alpha"),
        node("node_1", "heading", 3).with_prop("text", "Bravo"),
        node("node_2", "heading", 0).with_prop("text", "Top"),
        node("node_3", "heading", 3).with_prop("text", "Charlie"),
    ];
    let code = generate_screen_code(&nodes, "Headings");

    let positions: Vec<usize> = ["Top", "Alpha", "Bravo", "Charlie"]
        .iter()
        .map(|text| code.find(&format!(">{}</Text>", text)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_leading_digit_label_is_valid_identifier() {
    let nodes = vec![node("node_0", "input-email", 0).with_prop("label", "2nd Email")];
    let code = generate_screen_code(&nodes, "Contact");

    assert!(code.contains("const [field2ndEmail, setField2ndEmail] = useState('');"));
    assert!(!code.contains("[2ndEmail"));
}

#[test]
fn test_password_pair_compared_once() {
    let nodes = vec![
        node("node_0", "input-password", 0).with_prop("label", "Password"),
        node("node_1", "input-password", 1).with_prop("label", "Confirm Password"),
        node("node_2", "input-password", 2).with_prop("label", "Old Password"),
        node("node_3", "rainbow-button", 3),
    ];
    let code = generate_screen_code(&nodes, "Passwords");

    assert_eq!(code.matches("!==").count(), 1);
    assert!(code.contains("    if (password !== confirmPassword) {"));
    assert!(code.contains("      Alert.alert('Error', 'Passwords do not match');"));
    assert!(!code.contains("oldPassword !=="));
}

#[test]
fn test_single_password_has_no_comparison() {
    let nodes = vec![
        node("node_0", "input-password", 0).with_prop("label", "Password"),
        node("node_1", "rainbow-button", 1),
    ];
    let code = generate_screen_code(&nodes, "Login");
    assert!(!code.contains("!=="));
    assert!(!code.contains("isValid"));
}

#[test]
fn test_secure_text_input_counts_as_password() {
    let nodes = vec![
        node("node_0", "input-text", 0)
            .with_prop("label", "Secret")
            .with_prop("secureTextEntry", true),
        node("node_1", "input-password", 1).with_prop("label", "Repeat Secret"),
        node("node_2", "button-gradient", 2),
    ];
    let code = generate_screen_code(&nodes, "Secrets");
    assert!(code.contains("    if (secret !== repeatSecret) {"));
}

#[test]
fn test_password_comparison_uses_assigned_names() {
    let nodes = vec![
        node("node_0", "input-password", 0).with_prop("label", "Password"),
        node("node_1", "input-password", 1).with_prop("label", "Password"),
        node("node_2", "rainbow-button", 2),
    ];
    let code = generate_screen_code(&nodes, "Twice");
    assert!(code.contains("    if (password !== password1) {"));
}

#[test]
fn test_unknown_type_leaves_no_trace() {
    let nodes = vec![
        node("node_0", "heading", 0).with_prop("text", "Welcome"),
        node("ghost_42", "hologram", 1)
            .with_prop("label", "Zebra Stripe")
            .with_prop("required", true),
    ];
    let code = generate_screen_code(&nodes, "Ghost");

    assert!(!code.contains("ghost_42"));
    assert!(!code.contains("hologram"));
    assert!(!code.contains("zebraStripe"));
    assert!(!code.contains("Zebra Stripe"));
    assert!(!code.contains("useState('')"));
    assert!(code.contains(">Welcome</Text>"));
}

#[test]
fn test_only_unknown_types_still_generates_shell() {
    let code = generate_screen_code(&[node("x", "hologram", 0)], "Empty");
    assert!(code.contains("export default function Empty() {"));
    assert!(!code.contains("\nimport CustomInput"));
}

#[test]
fn test_switch_styles_only_when_present() {
    let without = generate_screen_code(&[node("a", "heading", 0)], "Plain");
    assert!(!without.contains("switchRow: {"));
    assert!(!without.contains("buttonText: {"));

    let with = generate_screen_code(
        &[node("a", "switch-toggle", 0).with_prop("label", "Remember Me")],
        "Toggle",
    );
    assert!(with.contains("  switchRow: {\n    flexDirection: 'row',"));
    assert!(with.contains("  switchLabel: {\n    fontSize: 16,\n    color: '#333',\n  },"));
    assert!(with.contains("const [rememberMe, setRememberMe] = useState(false);"));
}

#[test]
fn test_output_is_deterministic() {
    let nodes = vec![
        node("a", "input-email", 0).with_prop("label", "Email").with_prop("required", true),
        node("b", "date-picker", 1).with_prop("label", "Birthday"),
        node("c", "button-gradient", 2),
    ];
    assert_eq!(
        generate_screen_code(&nodes, "Stable"),
        generate_screen_code(&nodes, "Stable")
    );
}

#[test]
fn test_required_files_deduplicated() {
    let nodes = vec![
        node("a", "input-email", 0),
        node("b", "input-password", 1),
        node("c", "hologram", 2),
        node("d", "date-picker", 3),
    ];
    assert_eq!(required_files(&nodes), vec!["CustomInput", "DatePicker"]);
}

#[test]
fn test_canvas_round_trip_into_generator() {
    let registry = DefinitionRegistry::builtin();
    let mut canvas = Canvas::new();

    let email = registry.get("input-email").unwrap().default_props();
    let button = registry.get("rainbow-button").unwrap().default_props();
    let first = canvas.add("input-email", email).id.clone();
    let second = canvas.add("rainbow-button", button).id.clone();
    canvas.move_node(&second, &first);

    let code = generate_screen_code(canvas.nodes(), "Moved");
    let button_at = code.find("<RainbowButton").unwrap();
    let input_at = code.find("<CustomInput").unwrap();
    assert!(button_at < input_at);
    assert!(code.contains("const [email, setEmail] = useState('');"));
}

#[test]
fn test_custom_definition_registration() {
    let mut generator = ScreenGenerator::new(DefinitionRegistry::with_builtins(), GeneratorConfig::default());
    generator.registry_mut().register(
        DefinitionBuilder::new("input-note", "Note", JsxTemplate::CustomInput)
            .category(Category::Input)
            .import("NoteInput")
            .state(StateType::Text)
            .build(),
    );

    let nodes = vec![node("a", "input-note", 0).with_prop("label", "Note")];
    let code = generator.generate(&nodes, "Notes");
    assert!(code.contains("import NoteInput from './NoteInput';"));
    assert!(code.contains("const [note, setNote] = useState('');"));
    assert_eq!(generator.required_file_names(&nodes), vec!["NoteInput.tsx"]);
}
