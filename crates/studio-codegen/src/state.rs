//! State variable table for a generated screen.

use std::collections::HashSet;

use studio_core::PropMap;
use studio_registry::{setter_name, StateSpec, StateType};

use crate::naming::{to_var_name, RESERVED};

/// A `useState` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVar {
    pub name: String,
    pub state_type: StateType,
    /// Initial value literal.
    pub default: String,
}

impl StateVar {
    /// The declaration line, without indentation.
    pub fn declaration(&self) -> String {
        let setter = setter_name(&self.name);
        match self.state_type {
            StateType::Text | StateType::Boolean => {
                format!("const [{}, {}] = useState({});", self.name, setter, self.default)
            }
            StateType::Date => format!(
                "const [{}, {}] = useState<{}>({});",
                self.name,
                setter,
                self.state_type.to_typescript(),
                self.default
            ),
        }
    }
}

/// A required field checked by the submit handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    pub var_name: String,
    pub label: String,
    pub state_type: StateType,
    pub error_message: String,
}

impl ValidationRule {
    /// Name of the paired error-message variable.
    pub fn error_var(&self) -> String {
        format!("{}Error", self.var_name)
    }
}

/// Collects state variables and validation rules while nodes are processed.
///
/// Every name handed out is unique within the file: value names, their
/// setters and `<name>Error` companions never collide with each other or
/// with identifiers the generated file already uses.
#[derive(Debug, Default)]
pub struct StateTable {
    vars: Vec<StateVar>,
    rules: Vec<ValidationRule>,
    taken: HashSet<String>,
    index: usize,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the state for one node and return its variable name.
    ///
    /// `label` is the node's explicitly configured label; `resolved` holds
    /// its props merged over the definition defaults.
    pub fn declare(
        &mut self,
        label: Option<&str>,
        resolved: &PropMap,
        spec: &StateSpec,
        default_error_message: &str,
    ) -> String {
        let fallback = format!("field{}", self.index);
        let base = label
            .map(to_var_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| fallback.clone());

        let required = resolved.get("required").is_some_and(|v| v.is_truthy());
        let name = self.unique_name(&base, required);

        self.claim(&name);
        self.vars.push(StateVar {
            name: name.clone(),
            state_type: spec.state_type,
            default: spec.default_literal().to_string(),
        });

        if required {
            let error_message = resolved
                .get("errorMessage")
                .filter(|v| v.is_truthy())
                .map(|v| v.to_literal())
                .unwrap_or_else(|| default_error_message.to_string());

            let rule = ValidationRule {
                var_name: name.clone(),
                label: label.map(str::to_string).unwrap_or(fallback),
                state_type: spec.state_type,
                error_message,
            };
            let error_var = rule.error_var();
            self.claim(&error_var);
            self.vars.push(StateVar {
                name: error_var,
                state_type: StateType::Text,
                default: StateType::Text.default_literal().to_string(),
            });
            self.rules.push(rule);
        }

        self.index += 1;
        name
    }

    /// Declared variables, in declaration order.
    pub fn vars(&self) -> &[StateVar] {
        &self.vars
    }

    /// Required-field rules, in node order.
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// `base` if free, else `base` suffixed with the running index, counting
    /// upward until free.
    fn unique_name(&self, base: &str, with_error: bool) -> String {
        if self.is_free(base, with_error) {
            return base.to_string();
        }
        let mut suffix = self.index;
        loop {
            let candidate = format!("{}{}", base, suffix);
            if self.is_free(&candidate, with_error) {
                return candidate;
            }
            suffix += 1;
        }
    }

    fn is_free(&self, name: &str, with_error: bool) -> bool {
        let usable = |n: &str| {
            !RESERVED.contains(&n) && !self.taken.contains(n) && !self.taken.contains(&setter_name(n))
        };
        usable(name) && (!with_error || usable(&format!("{}Error", name)))
    }

    fn claim(&mut self, name: &str) {
        self.taken.insert(setter_name(name));
        self.taken.insert(name.to_string());
    }
}
