//! Template engine for the generated stylesheet.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Base `keyboardAvoiding` and `container` entries.
pub const STYLES_BASE: &str = "styles_base";
/// `switchRow` and `switchLabel` entries.
pub const STYLES_SWITCH_ROW: &str = "styles_switch_row";
/// `buttonText` entry.
pub const STYLES_BUTTON_TEXT: &str = "styles_button_text";

const BASE_TEMPLATE: &str = r#"  keyboardAvoiding: {
    flex: 1,
    backgroundColor: '{{background_color}}',
  },
  container: {
    flex: 1,
    padding: {{padding}},
  },"#;

const SWITCH_ROW_TEMPLATE: &str = r#"  switchRow: {
    flexDirection: 'row',
    alignItems: 'center',
    justifyContent: 'space-between',
    paddingVertical: {{switch_row_padding}},
  },
  switchLabel: {
    fontSize: {{switch_label_font_size}},
    color: '{{switch_label_color}}',
  },"#;

const BUTTON_TEXT_TEMPLATE: &str = r#"  buttonText: {
    color: '{{button_text_color}}',
    fontSize: {{button_text_font_size}},
    fontWeight: '{{button_text_font_weight}}',
  },"#;

/// Template engine using Handlebars.
///
/// Output is source code, so HTML escaping is turned off and missing fields
/// are errors rather than empty strings.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine with no templates registered.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        Self { handlebars }
    }

    /// Create an engine with the stylesheet templates registered.
    pub fn with_stylesheet() -> Result<Self> {
        let mut engine = Self::new();
        engine.register_template(STYLES_BASE, BASE_TEMPLATE)?;
        engine.register_template(STYLES_SWITCH_ROW, SWITCH_ROW_TEMPLATE)?;
        engine.register_template(STYLES_BUTTON_TEXT, BUTTON_TEXT_TEMPLATE)?;
        Ok(engine)
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Check if a template is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
