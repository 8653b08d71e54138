//! Definition registry for looking up component definitions by type.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::Serialize;

use crate::builtin;
use crate::definition::{Category, ComponentDefinition};

/// A registry of component definitions, keyed by type in registration order.
#[derive(Debug, Clone, Default)]
pub struct DefinitionRegistry {
    definitions: IndexMap<String, ComponentDefinition>,
}

/// Definitions of one palette category.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteGroup<'a> {
    pub category: Category,
    pub definitions: Vec<&'a ComponentDefinition>,
}

impl DefinitionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            definitions: IndexMap::new(),
        }
    }

    /// Create a registry holding the built-in definitions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for definition in builtin::definitions() {
            registry.register(definition);
        }
        registry
    }

    /// The shared built-in registry.
    pub fn builtin() -> &'static DefinitionRegistry {
        static BUILTIN: OnceLock<DefinitionRegistry> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_builtins)
    }

    /// Register a definition, replacing any previous one with the same type.
    pub fn register(&mut self, definition: ComponentDefinition) {
        self.definitions
            .insert(definition.component_type.clone(), definition);
    }

    /// Get a definition by exact type.
    pub fn get(&self, component_type: &str) -> Option<&ComponentDefinition> {
        self.definitions.get(component_type)
    }

    /// Check if a type is registered.
    pub fn contains(&self, component_type: &str) -> bool {
        self.definitions.contains_key(component_type)
    }

    /// All registered types.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(|s| s.as_str())
    }

    /// All definitions in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.definitions.values()
    }

    /// Definitions grouped by category, in palette order. Empty groups are omitted.
    pub fn palette(&self) -> Vec<PaletteGroup<'_>> {
        Category::ALL
            .iter()
            .map(|category| PaletteGroup {
                category: *category,
                definitions: self
                    .definitions
                    .values()
                    .filter(|d| d.category == *category)
                    .collect(),
            })
            .filter(|group| !group.definitions.is_empty())
            .collect()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{DefinitionBuilder, StateType};
    use crate::templates::JsxTemplate;

    #[test]
    fn test_registry_new() {
        let registry = DefinitionRegistry::new();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_builtin_table() {
        let registry = DefinitionRegistry::builtin();
        assert_eq!(registry.len(), 13);
        let types: Vec<&str> = registry.types().collect();
        assert_eq!(types[0], "heading");
        assert_eq!(types[12], "button-gradient");

        let password = registry.get("input-password").unwrap();
        assert!(password.secure_entry);
        assert_eq!(password.state.as_ref().unwrap().state_type, StateType::Text);

        let date = registry.get("date-picker").unwrap();
        assert_eq!(date.state.as_ref().unwrap().default_literal(), "undefined");

        assert!(registry.get("heading").unwrap().import_name.is_none());
        assert!(registry.get("rainbow-button").unwrap().submits);
        assert!(registry.get("button-gradient").unwrap().submits);
        assert!(registry.get("Heading").is_none());
    }

    #[test]
    fn test_default_props_follow_controls() {
        let registry = DefinitionRegistry::builtin();
        let props = registry.get("input-email").unwrap().default_props();
        assert_eq!(props["label"].as_str(), Some("Email"));
        assert_eq!(props["keyboardType"].as_str(), Some("email-address"));
        assert_eq!(props["errorMessage"].as_str(), Some("This field is required"));
    }

    #[test]
    fn test_palette_grouping() {
        let registry = DefinitionRegistry::builtin();
        let palette = registry.palette();
        let counts: Vec<(Category, usize)> = palette
            .iter()
            .map(|g| (g.category, g.definitions.len()))
            .collect();
        assert_eq!(
            counts,
            vec![(Category::Layout, 2), (Category::Input, 9), (Category::Button, 2)]
        );
    }

    #[test]
    fn test_definition_json_shape() {
        let spacer = DefinitionRegistry::builtin().get("spacer").unwrap();
        let json = serde_json::to_value(spacer).unwrap();
        assert_eq!(json["type"], "spacer");
        assert_eq!(json["category"], "Layout");
        assert_eq!(json["propControls"][0]["defaultValue"], 20.0);
        assert!(json.get("template").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = DefinitionRegistry::with_builtins();
        registry.register(
            DefinitionBuilder::new("heading", "Title", JsxTemplate::Heading)
                .category(Category::Layout)
                .build(),
        );
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.get("heading").unwrap().name, "Title");
    }
}
