//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for screen generation. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Screen name used when the caller has none.
    pub default_screen_name: String,
    /// Returned instead of a file when the canvas is empty.
    pub empty_placeholder: String,
    /// Required-field message when a node sets none.
    pub default_error_message: String,
    /// Alert shown when validation passes.
    pub success_message: String,
    /// Alert shown when the two password fields differ.
    pub mismatch_message: String,
    pub style: ScreenStyle,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_screen_name: "MyScreen".to_string(),
            empty_placeholder: "// Drag components onto the canvas to generate code".to_string(),
            default_error_message: "This field is required".to_string(),
            success_message: "Form submitted successfully!".to_string(),
            mismatch_message: "Passwords do not match".to_string(),
            style: ScreenStyle::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Values written into the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenStyle {
    pub background_color: String,
    pub padding: u32,
    pub switch_row_padding: u32,
    pub switch_label_font_size: u32,
    pub switch_label_color: String,
    pub button_text_color: String,
    pub button_text_font_size: u32,
    pub button_text_font_weight: String,
}

impl Default for ScreenStyle {
    fn default() -> Self {
        Self {
            background_color: "#fff".to_string(),
            padding: 20,
            switch_row_padding: 12,
            switch_label_font_size: 16,
            switch_label_color: "#333".to_string(),
            button_text_color: "#fff".to_string(),
            button_text_font_size: 16,
            button_text_font_weight: "600".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let config = GeneratorConfig::from_json(
            r#"{"success_message": "Saved!", "style": {"padding": 24}}"#,
        )
        .unwrap();
        assert_eq!(config.success_message, "Saved!");
        assert_eq!(config.style.padding, 24);
        assert_eq!(config.style.background_color, "#fff");
        assert_eq!(config.default_screen_name, "MyScreen");
    }

    #[test]
    fn test_invalid_json() {
        assert!(GeneratorConfig::from_json("{\"style\": 3}").is_err());
    }
}
