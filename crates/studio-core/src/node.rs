//! Canvas nodes and prop-control descriptors.

use serde::{Deserialize, Serialize};

use crate::types::{PropMap, PropValue};

/// A component instance placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    /// Unique id, stable for the node's lifetime on the canvas.
    pub id: String,
    /// Component type, matching a definition's type string.
    #[serde(rename = "type")]
    pub component_type: String,
    /// User-configured props. Unset props fall back to the definition defaults.
    #[serde(default)]
    pub props: PropMap,
    /// Top-to-bottom position on the screen.
    #[serde(default)]
    pub order: i64,
}

impl CanvasNode {
    /// Create a node with no props set.
    pub fn new(id: impl Into<String>, component_type: impl Into<String>, order: i64) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            props: PropMap::new(),
            order,
        }
    }

    /// Set a prop.
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Get an explicitly configured prop.
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }
}

/// How a prop is edited in the props panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Text,
    Boolean,
    Select,
    Number,
    Color,
}

/// One choice of a `select` control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// A configurable property of a component definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropControl {
    /// Prop name, e.g. `label` or `variant`.
    pub name: String,
    /// Label shown in the props panel.
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ControlKind,
    #[serde(rename = "defaultValue")]
    pub default: PropValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl PropControl {
    /// Create a control without options or placeholder.
    pub fn new(name: &str, label: &str, kind: ControlKind, default: impl Into<PropValue>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            default: default.into(),
            options: Vec::new(),
            placeholder: None,
        }
    }

    pub fn text(name: &str, label: &str, default: &str) -> Self {
        Self::new(name, label, ControlKind::Text, default)
    }

    pub fn boolean(name: &str, label: &str, default: bool) -> Self {
        Self::new(name, label, ControlKind::Boolean, default)
    }

    pub fn number(name: &str, label: &str, default: f64) -> Self {
        Self::new(name, label, ControlKind::Number, default)
    }

    pub fn color(name: &str, label: &str, default: &str) -> Self {
        Self::new(name, label, ControlKind::Color, default)
    }

    /// A `select` control over `(label, value)` pairs.
    pub fn select(name: &str, label: &str, default: &str, options: &[(&str, &str)]) -> Self {
        let mut control = Self::new(name, label, ControlKind::Select, default);
        control.options = options
            .iter()
            .map(|(label, value)| SelectOption::new(label, value))
            .collect();
        control
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }
}
