//! Component definitions.

use serde::Serialize;
use studio_core::{PropControl, PropMap};

use crate::templates::JsxTemplate;

/// Palette grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Layout,
    Input,
    Button,
}

impl Category {
    /// Categories in palette display order.
    pub const ALL: [Category; 3] = [Category::Layout, Category::Input, Category::Button];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Layout => "Layout",
            Category::Input => "Input",
            Category::Button => "Button",
        }
    }
}

/// Semantic type of a generated state variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateType {
    Text,
    Boolean,
    /// An optional date, unset until picked.
    Date,
}

impl StateType {
    /// TypeScript type of the variable.
    pub fn to_typescript(&self) -> &'static str {
        match self {
            StateType::Text => "string",
            StateType::Boolean => "boolean",
            StateType::Date => "Date | undefined",
        }
    }

    /// Initial value literal.
    pub fn default_literal(&self) -> &'static str {
        match self {
            StateType::Text => "''",
            StateType::Boolean => "false",
            StateType::Date => "undefined",
        }
    }
}

/// State requirements of a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSpec {
    pub state_type: StateType,
    /// Overrides the type's default literal.
    pub default: Option<String>,
}

impl StateSpec {
    pub fn new(state_type: StateType) -> Self {
        Self {
            state_type,
            default: None,
        }
    }

    /// The initial value literal for the variable.
    pub fn default_literal(&self) -> &str {
        self.default
            .as_deref()
            .unwrap_or_else(|| self.state_type.default_literal())
    }
}

/// Stylesheet entries a component's markup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleBlock {
    /// `switchRow` and `switchLabel`.
    SwitchRow,
    /// `buttonText`.
    ButtonText,
}

/// Static template and metadata for one component type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Unique type id, e.g. `input-email`.
    #[serde(rename = "type")]
    pub component_type: String,
    /// Display name.
    pub name: String,
    pub category: Category,
    pub icon: String,
    pub prop_controls: Vec<PropControl>,
    #[serde(skip)]
    pub template: JsxTemplate,
    /// Component the node renders as; `None` for plain primitives.
    pub import_name: Option<String>,
    pub state: Option<StateSpec>,
    /// Primary submit button, wired to the generated submit handler.
    pub submits: bool,
    /// Always a password field, regardless of props.
    pub secure_entry: bool,
    #[serde(skip)]
    pub style_blocks: Vec<StyleBlock>,
}

impl ComponentDefinition {
    /// Whether placing this component requires a state variable.
    pub fn needs_state(&self) -> bool {
        self.state.is_some()
    }

    /// Import the generated screen needs for this component. Empty names count as none.
    pub fn required_import(&self) -> Option<&str> {
        self.import_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Initial props for a freshly placed node.
    pub fn default_props(&self) -> PropMap {
        self.prop_controls
            .iter()
            .map(|control| (control.name.clone(), control.default.clone()))
            .collect()
    }

    /// Explicit node props layered over the control defaults.
    pub fn resolve_props(&self, props: &PropMap) -> PropMap {
        let mut resolved = self.default_props();
        for (name, value) in props {
            resolved.insert(name.clone(), value.clone());
        }
        resolved
    }

    /// Whether a node with these resolved props is a password field.
    pub fn is_password_field(&self, resolved: &PropMap) -> bool {
        self.secure_entry
            || (self.template == JsxTemplate::CustomInput
                && resolved
                    .get("secureTextEntry")
                    .is_some_and(|v| v.is_truthy()))
    }

    /// Markup fragment for one instance.
    pub fn generate_jsx(&self, props: &PropMap, state_var: &str) -> String {
        self.template.render(props, state_var)
    }
}

/// Builder for creating component definitions.
pub struct DefinitionBuilder {
    definition: ComponentDefinition,
}

impl DefinitionBuilder {
    /// Start a definition with the given type id and display name.
    pub fn new(component_type: &str, name: &str, template: JsxTemplate) -> Self {
        Self {
            definition: ComponentDefinition {
                component_type: component_type.to_string(),
                name: name.to_string(),
                category: Category::Layout,
                icon: String::new(),
                prop_controls: Vec::new(),
                template,
                import_name: None,
                state: None,
                submits: false,
                secure_entry: false,
                style_blocks: Vec::new(),
            },
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.definition.category = category;
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.definition.icon = icon.to_string();
        self
    }

    pub fn import(mut self, import_name: &str) -> Self {
        self.definition.import_name = (!import_name.is_empty()).then(|| import_name.to_string());
        self
    }

    pub fn state(mut self, state_type: StateType) -> Self {
        self.definition.state = Some(StateSpec::new(state_type));
        self
    }

    pub fn control(mut self, control: PropControl) -> Self {
        self.definition.prop_controls.push(control);
        self
    }

    pub fn controls(mut self, controls: Vec<PropControl>) -> Self {
        self.definition.prop_controls.extend(controls);
        self
    }

    pub fn submits(mut self) -> Self {
        self.definition.submits = true;
        self
    }

    pub fn secure_entry(mut self) -> Self {
        self.definition.secure_entry = true;
        self
    }

    pub fn style_block(mut self, block: StyleBlock) -> Self {
        self.definition.style_blocks.push(block);
        self
    }

    pub fn build(self) -> ComponentDefinition {
        self.definition
    }
}
