//! JSX fragment templates.
//!
//! Every component type renders through one of a closed set of templates.
//! Fragments start at column zero; the screen generator indents them into
//! place.

use studio_core::types::format_number;
use studio_core::PropMap;

/// The markup template a definition renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsxTemplate {
    Heading,
    Spacer,
    /// Shared by every text input variant.
    CustomInput,
    DatePicker,
    SwitchToggle,
    RainbowButton,
    GradientButton,
}

impl JsxTemplate {
    /// Render one instance from its resolved props and bound state variable.
    ///
    /// Prop values are interpolated verbatim.
    pub fn render(&self, props: &PropMap, state_var: &str) -> String {
        let lines = match self {
            JsxTemplate::Heading => heading(props),
            JsxTemplate::Spacer => vec![format!(
                "<View style={{{{ height: {} }}}} />",
                text_or(props, "height", "20")
            )],
            JsxTemplate::CustomInput => custom_input(props, state_var),
            JsxTemplate::DatePicker => date_picker(props, state_var),
            JsxTemplate::SwitchToggle => vec![
                "<View style={styles.switchRow}>".to_string(),
                format!(
                    "  <Text style={{styles.switchLabel}}>{}</Text>",
                    text_or(props, "label", "Toggle")
                ),
                format!(
                    "  <SwitchToggle value={{{}}} onValueChange={{{}}} />",
                    state_var,
                    setter_name(state_var)
                ),
                "</View>".to_string(),
            ],
            JsxTemplate::RainbowButton => vec![
                CENTERED_ROW.to_string(),
                format!(
                    "  <RainbowButton width={{{}}} height={{{}}} onPress={{handleSubmit}}>",
                    number_or(props, "width", 320.0),
                    text_or(props, "height", "50")
                ),
                format!(
                    "    <Text style={{styles.buttonText}}>{}</Text>",
                    text_or(props, "text", "Submit")
                ),
                "  </RainbowButton>".to_string(),
                "</View>".to_string(),
            ],
            JsxTemplate::GradientButton => gradient_button(props),
        };
        lines.join("\n")
    }
}

const CENTERED_ROW: &str = "<View style={{ alignItems: 'center', width: '100%' }}>";

/// Uppercase the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the setter paired with a state variable.
pub fn setter_name(state_var: &str) -> String {
    format!("set{}", capitalize(state_var))
}

fn heading(props: &PropMap) -> Vec<String> {
    let align = match text_unless(props, "align", "left") {
        Some(align) => format!(", textAlign: '{}' as const", align),
        None => String::new(),
    };
    vec![format!(
        "<Text style={{{{ fontSize: 24, fontWeight: '700', marginBottom: 8, color: '#111'{} }}}}>{}</Text>",
        align,
        text_or(props, "text", "Screen Title")
    )]
}

fn custom_input(props: &PropMap, state_var: &str) -> Vec<String> {
    let setter = setter_name(state_var);
    let mut lines = vec!["<CustomInput".to_string()];
    if let Some(label) = text_if(props, "label") {
        lines.push(format!("  label=\"{}\"", label));
    }
    if let Some(placeholder) = text_if(props, "placeholder") {
        lines.push(format!("  placeholder=\"{}\"", placeholder));
    }
    lines.push(format!("  value={{{}}}", state_var));
    lines.push(format!("  onChangeText={{{}}}", setter));
    if let Some(variant) = text_unless(props, "variant", "default") {
        lines.push(format!("  variant=\"{}\"", variant));
    }
    if let Some(size) = text_unless(props, "size", "medium") {
        lines.push(format!("  size=\"{}\"", size));
    }
    if truthy(props, "required") {
        lines.push("  required".to_string());
        lines.push(format!("  error={{{}Error}}", state_var));
    }
    if truthy(props, "secureTextEntry") {
        lines.push("  secureTextEntry".to_string());
    }
    if truthy(props, "autoPassword") {
        lines.push("  autoPassword".to_string());
    }
    if let Some(keyboard) = text_unless(props, "keyboardType", "default") {
        lines.push(format!("  keyboardType=\"{}\"", keyboard));
    }
    if truthy(props, "multiline") {
        lines.push("  multiline".to_string());
    }
    if truthy(props, "clearable") {
        lines.push("  clearable".to_string());
        lines.push(format!("  onClear={{() => {}('')}}", setter));
    }
    lines.push("/>".to_string());
    lines
}

fn date_picker(props: &PropMap, state_var: &str) -> Vec<String> {
    let mut lines = vec!["<DatePicker".to_string()];
    if let Some(label) = text_if(props, "label") {
        lines.push(format!("  label=\"{}\"", label));
    }
    lines.push(format!("  value={{{}}}", state_var));
    lines.push(format!("  onDateChange={{{}}}", setter_name(state_var)));
    if truthy(props, "required") {
        lines.push("  required".to_string());
        lines.push(format!("  error={{{}Error}}", state_var));
    }
    lines.push("/>".to_string());
    lines
}

fn gradient_button(props: &PropMap) -> Vec<String> {
    let mut lines = vec![CENTERED_ROW.to_string(), "  <GradientButton".to_string()];
    lines.push("    variant=\"primary\"".to_string());
    lines.push(format!("    title=\"{}\"", text_or(props, "title", "Submit")));
    lines.push(format!(
        "    gradientColors={{['{}', '{}']}}",
        text_or(props, "color1", "#FF5F6D"),
        text_or(props, "color2", "#FFC371")
    ));
    if let Some(size) = text_unless(props, "size", "medium") {
        lines.push(format!("    size=\"{}\"", size));
    }
    match props.get("borderRadius") {
        Some(radius) if radius.as_number() != 12.0 || radius.as_str().is_some() => {
            lines.push(format!("    borderRadius={{{}}}", radius.to_literal()));
        }
        _ => {}
    }

    let style = if truthy(props, "width") || truthy(props, "height") {
        let width = match props.get("width").and_then(|v| v.as_str()) {
            Some("100%") => "'100%'".to_string(),
            _ => number_or(props, "width", 320.0),
        };
        format!(
            " style={{{{ width: {}, height: {} }}}}",
            width,
            text_or(props, "height", "50")
        )
    } else {
        String::new()
    };

    lines.push(format!("    onPress={{handleSubmit}}{}", style));
    lines.push("  />".to_string());
    lines.push("</View>".to_string());
    lines
}

fn truthy(props: &PropMap, name: &str) -> bool {
    props.get(name).is_some_and(|v| v.is_truthy())
}

/// The prop's literal when truthy.
fn text_if(props: &PropMap, name: &str) -> Option<String> {
    props
        .get(name)
        .filter(|v| v.is_truthy())
        .map(|v| v.to_literal())
}

/// The prop's literal when truthy and different from `skip`.
fn text_unless(props: &PropMap, name: &str, skip: &str) -> Option<String> {
    text_if(props, name).filter(|v| v != skip)
}

/// The prop's literal, or `fallback` when falsy.
fn text_or(props: &PropMap, name: &str, fallback: &str) -> String {
    text_if(props, name).unwrap_or_else(|| fallback.to_string())
}

/// The prop coerced to a number, or `fallback` when falsy.
fn number_or(props: &PropMap, name: &str, fallback: f64) -> String {
    let n = props
        .get(name)
        .filter(|v| v.is_truthy())
        .map_or(fallback, |v| v.as_number());
    format_number(n)
}
