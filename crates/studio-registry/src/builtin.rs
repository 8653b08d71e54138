//! Built-in component definitions, in palette order.

use studio_core::PropControl;

use crate::definition::{Category, ComponentDefinition, DefinitionBuilder, StateType, StyleBlock};
use crate::templates::JsxTemplate;

const SIZE_OPTIONS: &[(&str, &str)] = &[("Small", "small"), ("Medium", "medium"), ("Large", "large")];

/// Defaults that differ between the text input variants.
#[derive(Default)]
struct InputDefaults {
    label: &'static str,
    placeholder: &'static str,
    secure_text_entry: bool,
    auto_password: bool,
    keyboard_type: Option<&'static str>,
    multiline: bool,
    clearable: bool,
}

fn input_controls(defaults: InputDefaults) -> Vec<PropControl> {
    vec![
        PropControl::text("label", "Label", defaults.label).with_placeholder("e.g. Full Name"),
        PropControl::text("placeholder", "Placeholder", defaults.placeholder)
            .with_placeholder("e.g. Enter value"),
        PropControl::select(
            "variant",
            "Variant",
            "outlined",
            &[
                ("Default", "default"),
                ("Outlined", "outlined"),
                ("Filled", "filled"),
                ("Underlined", "underlined"),
            ],
        ),
        PropControl::select("size", "Size", "medium", SIZE_OPTIONS),
        PropControl::boolean("required", "Required", false),
        PropControl::text("errorMessage", "Required Error Msg", "This field is required")
            .with_placeholder("e.g. This field is required"),
        PropControl::boolean("secureTextEntry", "Password Field", defaults.secure_text_entry),
        PropControl::boolean("autoPassword", "Show/Hide Toggle", defaults.auto_password),
        PropControl::select(
            "keyboardType",
            "Keyboard",
            defaults.keyboard_type.unwrap_or("default"),
            &[
                ("Default", "default"),
                ("Email", "email-address"),
                ("Phone", "phone-pad"),
                ("Number", "numeric"),
            ],
        ),
        PropControl::boolean("multiline", "Multiline", defaults.multiline),
        PropControl::boolean("clearable", "Clearable", defaults.clearable),
    ]
}

fn input(component_type: &str, name: &str, icon: &str, defaults: InputDefaults) -> DefinitionBuilder {
    DefinitionBuilder::new(component_type, name, JsxTemplate::CustomInput)
        .category(Category::Input)
        .icon(icon)
        .import("CustomInput")
        .state(StateType::Text)
        .controls(input_controls(defaults))
}

/// Every built-in definition.
pub fn definitions() -> Vec<ComponentDefinition> {
    vec![
        DefinitionBuilder::new("heading", "Heading", JsxTemplate::Heading)
            .category(Category::Layout)
            .icon("📝")
            .control(PropControl::text("text", "Text", "Screen Title").with_placeholder("e.g. Sign Up"))
            .control(PropControl::select(
                "align",
                "Align",
                "left",
                &[("Left", "left"), ("Center", "center"), ("Right", "right")],
            ))
            .build(),
        DefinitionBuilder::new("spacer", "Spacer", JsxTemplate::Spacer)
            .category(Category::Layout)
            .icon("↕️")
            .control(PropControl::number("height", "Height (px)", 20.0))
            .build(),
        input(
            "input-text",
            "Text Input",
            "✏️",
            InputDefaults {
                label: "Full Name",
                placeholder: "Enter your name",
                ..Default::default()
            },
        )
        .build(),
        input(
            "input-email",
            "Email Input",
            "📧",
            InputDefaults {
                label: "Email",
                placeholder: "you@example.com",
                keyboard_type: Some("email-address"),
                ..Default::default()
            },
        )
        .build(),
        input(
            "input-password",
            "Password Input",
            "🔒",
            InputDefaults {
                label: "Password",
                placeholder: "••••••••",
                secure_text_entry: true,
                auto_password: true,
                ..Default::default()
            },
        )
        .secure_entry()
        .build(),
        input(
            "input-phone",
            "Phone Input",
            "📞",
            InputDefaults {
                label: "Phone Number",
                placeholder: "+1 (555) 000-0000",
                keyboard_type: Some("phone-pad"),
                ..Default::default()
            },
        )
        .build(),
        input(
            "input-number",
            "Number Input",
            "🔢",
            InputDefaults {
                label: "Amount",
                placeholder: "0.00",
                keyboard_type: Some("numeric"),
                ..Default::default()
            },
        )
        .build(),
        input(
            "input-search",
            "Search Input",
            "🔍",
            InputDefaults {
                label: "Search",
                placeholder: "Search...",
                clearable: true,
                ..Default::default()
            },
        )
        .build(),
        input(
            "input-multiline",
            "Multiline Input",
            "📄",
            InputDefaults {
                label: "Bio",
                placeholder: "Tell us about yourself...",
                multiline: true,
                ..Default::default()
            },
        )
        .build(),
        DefinitionBuilder::new("date-picker", "Date Picker", JsxTemplate::DatePicker)
            .category(Category::Input)
            .icon("📅")
            .import("DatePicker")
            .state(StateType::Date)
            .control(PropControl::text("label", "Label", "Select Date").with_placeholder("e.g. Date of Birth"))
            .control(PropControl::boolean("required", "Required", false))
            .control(
                PropControl::text("errorMessage", "Required Error Msg", "Date is required")
                    .with_placeholder("e.g. Date is required"),
            )
            .build(),
        DefinitionBuilder::new("switch-toggle", "Switch Toggle", JsxTemplate::SwitchToggle)
            .category(Category::Input)
            .icon("🔘")
            .import("SwitchToggle")
            .state(StateType::Boolean)
            .control(PropControl::text("label", "Label", "Toggle").with_placeholder("e.g. Remember Me"))
            .style_block(StyleBlock::SwitchRow)
            .build(),
        DefinitionBuilder::new("rainbow-button", "Rainbow Button", JsxTemplate::RainbowButton)
            .category(Category::Button)
            .icon("🌈")
            .import("RainbowButton")
            .control(PropControl::text("text", "Button Text", "Submit").with_placeholder("e.g. Sign Up"))
            .control(PropControl::number("width", "Width", 320.0))
            .control(PropControl::number("height", "Height", 50.0))
            .submits()
            .style_block(StyleBlock::ButtonText)
            .build(),
        DefinitionBuilder::new("button-gradient", "Gradient Button", JsxTemplate::GradientButton)
            .category(Category::Button)
            .icon("✨")
            .import("GradientButton")
            .control(PropControl::text("title", "Button Title", "Submit").with_placeholder("e.g. Sign Up"))
            .control(PropControl::text("width", "Width", "100%"))
            .control(PropControl::number("height", "Height (px)", 50.0))
            .control(PropControl::color("color1", "Gradient Start", "#FF5F6D"))
            .control(PropControl::color("color2", "Gradient End", "#FFC371"))
            .control(PropControl::select("size", "Size", "medium", SIZE_OPTIONS))
            .control(PropControl::number("borderRadius", "Border Radius", 12.0))
            .submits()
            .build(),
    ]
}
