//! TypeScript-friendly type definitions for WASM bindings.

use serde::{Deserialize, Serialize};
use studio_codegen::{GeneratorConfig, ScreenStyle};
use studio_core::PropControl;
use studio_registry::{
    Category, ComponentDefinition, DefinitionBuilder, JsxTemplate, StateType, StyleBlock,
};

/// Generator settings from JavaScript. Unset fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfigJs {
    #[serde(default)]
    pub default_screen_name: Option<String>,
    #[serde(default)]
    pub empty_placeholder: Option<String>,
    #[serde(default)]
    pub default_error_message: Option<String>,
    #[serde(default)]
    pub success_message: Option<String>,
    #[serde(default)]
    pub mismatch_message: Option<String>,
    #[serde(default)]
    pub style: Option<ScreenStyleJs>,
}

impl GeneratorConfigJs {
    pub fn into_core(self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(name) = self.default_screen_name {
            config.default_screen_name = name;
        }
        if let Some(placeholder) = self.empty_placeholder {
            config.empty_placeholder = placeholder;
        }
        if let Some(message) = self.default_error_message {
            config.default_error_message = message;
        }
        if let Some(message) = self.success_message {
            config.success_message = message;
        }
        if let Some(message) = self.mismatch_message {
            config.mismatch_message = message;
        }
        if let Some(style) = self.style {
            config.style = style.into_core();
        }
        config
    }
}

/// Stylesheet values from JavaScript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenStyleJs {
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub padding: Option<u32>,
    #[serde(default)]
    pub switch_row_padding: Option<u32>,
    #[serde(default)]
    pub switch_label_font_size: Option<u32>,
    #[serde(default)]
    pub switch_label_color: Option<String>,
    #[serde(default)]
    pub button_text_color: Option<String>,
    #[serde(default)]
    pub button_text_font_size: Option<u32>,
    #[serde(default)]
    pub button_text_font_weight: Option<String>,
}

impl ScreenStyleJs {
    pub fn into_core(self) -> ScreenStyle {
        let defaults = ScreenStyle::default();
        ScreenStyle {
            background_color: self.background_color.unwrap_or(defaults.background_color),
            padding: self.padding.unwrap_or(defaults.padding),
            switch_row_padding: self.switch_row_padding.unwrap_or(defaults.switch_row_padding),
            switch_label_font_size: self
                .switch_label_font_size
                .unwrap_or(defaults.switch_label_font_size),
            switch_label_color: self.switch_label_color.unwrap_or(defaults.switch_label_color),
            button_text_color: self.button_text_color.unwrap_or(defaults.button_text_color),
            button_text_font_size: self
                .button_text_font_size
                .unwrap_or(defaults.button_text_font_size),
            button_text_font_weight: self
                .button_text_font_weight
                .unwrap_or(defaults.button_text_font_weight),
        }
    }
}

/// Component definition from JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinitionJs {
    /// Type id, e.g. `input-note`.
    #[serde(rename = "type")]
    pub component_type: String,
    /// Display name.
    pub name: String,
    /// "Layout", "Input" or "Button".
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Markup template: "heading", "spacer", "custom-input", "date-picker",
    /// "switch-toggle", "rainbow-button" or "gradient-button".
    pub template: String,
    #[serde(default)]
    pub import_name: Option<String>,
    /// State type: "text", "boolean" or "date". Absent for stateless components.
    #[serde(default)]
    pub state_type: Option<String>,
    #[serde(default)]
    pub submits: bool,
    #[serde(default)]
    pub secure_entry: bool,
    #[serde(default)]
    pub prop_controls: Vec<PropControl>,
}

impl ComponentDefinitionJs {
    pub fn into_core(self) -> Result<ComponentDefinition, String> {
        let template = parse_template(&self.template)?;
        let category = match self.category.as_deref() {
            None | Some("Layout") => Category::Layout,
            Some("Input") => Category::Input,
            Some("Button") => Category::Button,
            Some(other) => return Err(format!("unknown category '{}'", other)),
        };

        let mut builder = DefinitionBuilder::new(&self.component_type, &self.name, template)
            .category(category)
            .icon(self.icon.as_deref().unwrap_or(""))
            .controls(self.prop_controls);

        if let Some(import) = &self.import_name {
            builder = builder.import(import);
        }
        if let Some(state_type) = &self.state_type {
            builder = builder.state(parse_state_type(state_type)?);
        }
        if self.submits {
            builder = builder.submits();
        }
        if self.secure_entry {
            builder = builder.secure_entry();
        }
        match template {
            JsxTemplate::SwitchToggle => builder = builder.style_block(StyleBlock::SwitchRow),
            JsxTemplate::RainbowButton => builder = builder.style_block(StyleBlock::ButtonText),
            _ => {}
        }

        Ok(builder.build())
    }
}

fn parse_template(name: &str) -> Result<JsxTemplate, String> {
    match name {
        "heading" => Ok(JsxTemplate::Heading),
        "spacer" => Ok(JsxTemplate::Spacer),
        "custom-input" => Ok(JsxTemplate::CustomInput),
        "date-picker" => Ok(JsxTemplate::DatePicker),
        "switch-toggle" => Ok(JsxTemplate::SwitchToggle),
        "rainbow-button" => Ok(JsxTemplate::RainbowButton),
        "gradient-button" => Ok(JsxTemplate::GradientButton),
        other => Err(format!("unknown template '{}'", other)),
    }
}

fn parse_state_type(name: &str) -> Result<StateType, String> {
    match name {
        "text" | "string" => Ok(StateType::Text),
        "boolean" => Ok(StateType::Boolean),
        "date" => Ok(StateType::Date),
        other => Err(format!("unknown state type '{}'", other)),
    }
}

/// Result of restoring a saved design.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreResultJs {
    /// Number of nodes now on the canvas.
    pub restored: usize,
    /// The design was present but past its expiry.
    pub expired: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_overrides() {
        let js: GeneratorConfigJs = serde_json::from_str(
            r##"{"successMessage": "Done", "style": {"backgroundColor": "#000"}}"##,
        )
        .unwrap();
        let config = js.into_core();
        assert_eq!(config.success_message, "Done");
        assert_eq!(config.style.background_color, "#000");
        assert_eq!(config.style.padding, 20);
        assert_eq!(config.mismatch_message, "Passwords do not match");
    }

    #[test]
    fn test_definition_into_core() {
        let js: ComponentDefinitionJs = serde_json::from_str(
            r#"{
                "type": "toggle-terms",
                "name": "Terms Toggle",
                "category": "Input",
                "template": "switch-toggle",
                "importName": "SwitchToggle",
                "stateType": "boolean",
                "propControls": [
                    {"name": "label", "label": "Label", "type": "text", "defaultValue": "Accept"}
                ]
            }"#,
        )
        .unwrap();

        let definition = js.into_core().unwrap();
        assert_eq!(definition.component_type, "toggle-terms");
        assert_eq!(definition.category, Category::Input);
        assert_eq!(definition.template, JsxTemplate::SwitchToggle);
        assert_eq!(definition.style_blocks, vec![StyleBlock::SwitchRow]);
        assert_eq!(definition.state.unwrap().state_type, StateType::Boolean);
        assert_eq!(definition.prop_controls.len(), 1);
    }

    #[test]
    fn test_definition_empty_import_name() {
        let js: ComponentDefinitionJs = serde_json::from_str(
            r#"{"type": "plain-note", "name": "Note", "template": "heading", "importName": ""}"#,
        )
        .unwrap();

        let definition = js.into_core().unwrap();
        assert!(definition.import_name.is_none());
        assert!(definition.required_import().is_none());
    }

    #[test]
    fn test_definition_rejects_unknown_template() {
        let js: ComponentDefinitionJs =
            serde_json::from_str(r#"{"type": "x", "name": "X", "template": "carousel"}"#).unwrap();
        assert!(js.into_core().is_err());
    }
}
