//! React Native screen generator.

use std::sync::OnceLock;

use indexmap::IndexSet;
use studio_core::CanvasNode;
use studio_registry::{setter_name, ComponentDefinition, DefinitionRegistry, StateType, StyleBlock};

use crate::config::GeneratorConfig;
use crate::state::StateTable;
use crate::templates::{TemplateEngine, STYLES_BASE, STYLES_BUTTON_TEXT, STYLES_SWITCH_ROW};

/// Indentation of component markup inside the scroll view.
const FRAGMENT_INDENT: &str = "          ";

const RN_IMPORTS: [&str; 6] = [
    "View",
    "ScrollView",
    "StyleSheet",
    "Text",
    "KeyboardAvoidingView",
    "Platform",
];

/// Generates a screen source file from canvas nodes.
#[derive(Debug, Clone)]
pub struct ScreenGenerator {
    registry: DefinitionRegistry,
    config: GeneratorConfig,
    engine: TemplateEngine,
}

/// Everything collected from one pass over the sorted nodes.
struct ScreenPlan {
    imports: IndexSet<String>,
    state: StateTable,
    fragments: Vec<String>,
    password_vars: Vec<String>,
    submits: bool,
    style_blocks: IndexSet<StyleBlock>,
}

impl ScreenGenerator {
    /// Create a generator over a definition registry.
    pub fn new(registry: DefinitionRegistry, config: GeneratorConfig) -> Self {
        let engine = TemplateEngine::with_stylesheet().unwrap_or_else(|err| {
            tracing::error!(%err, "failed to register stylesheet templates");
            TemplateEngine::new()
        });
        Self {
            registry,
            config,
            engine,
        }
    }

    /// Create a generator over the built-in definitions with default settings.
    pub fn with_builtin() -> Self {
        Self::new(DefinitionRegistry::with_builtins(), GeneratorConfig::default())
    }

    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    /// Mutable access, for registering extra definitions.
    pub fn registry_mut(&mut self) -> &mut DefinitionRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Generate the screen source for `nodes`.
    ///
    /// Never fails: unknown component types are dropped and an empty node
    /// list yields the configured placeholder comment. An empty
    /// `screen_name` falls back to the configured default; any other name is
    /// interpolated as given.
    pub fn generate(&self, nodes: &[CanvasNode], screen_name: &str) -> String {
        if nodes.is_empty() {
            return self.config.empty_placeholder.clone();
        }

        let screen_name = if screen_name.is_empty() {
            self.config.default_screen_name.as_str()
        } else {
            screen_name
        };

        let plan = self.plan(nodes);
        tracing::debug!(
            screen = screen_name,
            nodes = nodes.len(),
            fragments = plan.fragments.len(),
            state_vars = plan.state.vars().len(),
            "generating screen"
        );

        let mut lines = Vec::new();
        self.push_imports(&mut lines, &plan);

        lines.push(String::new());
        lines.push(format!("export default function {}() {{", screen_name));

        if !plan.state.is_empty() {
            for var in plan.state.vars() {
                lines.push(format!("  {}", var.declaration()));
            }
            lines.push(String::new());
        }

        if plan.submits {
            self.push_submit_handler(&mut lines, &plan);
        }

        lines.push("  return (".to_string());
        lines.push("    <SafeAreaProvider>".to_string());
        lines.push("      <KeyboardAvoidingView".to_string());
        lines.push("        style={styles.keyboardAvoiding}".to_string());
        lines.push("        behavior={Platform.OS === 'ios' ? 'padding' : 'height'}".to_string());
        lines.push("      >".to_string());
        lines.push(
            "        <ScrollView style={styles.container} keyboardShouldPersistTaps=\"handled\">"
                .to_string(),
        );
        for fragment in &plan.fragments {
            for line in fragment.lines() {
                lines.push(format!("{}{}", FRAGMENT_INDENT, line));
            }
        }
        lines.push("        </ScrollView>".to_string());
        lines.push("      </KeyboardAvoidingView>".to_string());
        lines.push("    </SafeAreaProvider>".to_string());
        lines.push("  );".to_string());
        lines.push("}".to_string());

        lines.push(String::new());
        self.push_stylesheet(&mut lines, &plan);
        lines.push(String::new());

        lines.join("\n")
    }

    /// Import names of the components `nodes` render with, first use first.
    pub fn required_files(&self, nodes: &[CanvasNode]) -> Vec<String> {
        self.collect_imports(nodes).into_iter().collect()
    }

    /// File names to copy alongside the screen, e.g. `CustomInput.tsx`.
    pub fn required_file_names(&self, nodes: &[CanvasNode]) -> Vec<String> {
        self.collect_imports(nodes)
            .into_iter()
            .map(|name| format!("{}.tsx", name))
            .collect()
    }

    /// Nodes in screen order paired with their definitions. Unknown types are
    /// dropped.
    fn resolve<'a>(
        &'a self,
        nodes: &'a [CanvasNode],
    ) -> impl Iterator<Item = (&'a CanvasNode, &'a ComponentDefinition)> + 'a {
        let mut sorted: Vec<&CanvasNode> = nodes.iter().collect();
        sorted.sort_by_key(|node| node.order);

        sorted.into_iter().filter_map(move |node| {
            match self.registry.get(&node.component_type) {
                Some(definition) => Some((node, definition)),
                None => {
                    tracing::trace!(
                        node = %node.id,
                        component_type = %node.component_type,
                        "skipping unknown component type"
                    );
                    None
                }
            }
        })
    }

    fn collect_imports(&self, nodes: &[CanvasNode]) -> IndexSet<String> {
        self.resolve(nodes)
            .filter_map(|(_, definition)| definition.required_import().map(str::to_string))
            .collect()
    }

    fn plan(&self, nodes: &[CanvasNode]) -> ScreenPlan {
        let mut plan = ScreenPlan {
            imports: IndexSet::new(),
            state: StateTable::new(),
            fragments: Vec::new(),
            password_vars: Vec::new(),
            submits: false,
            style_blocks: IndexSet::new(),
        };

        for (node, definition) in self.resolve(nodes) {
            if let Some(import) = definition.required_import() {
                plan.imports.insert(import.to_string());
            }
            plan.submits |= definition.submits;
            plan.style_blocks.extend(definition.style_blocks.iter().copied());

            let resolved = definition.resolve_props(&node.props);
            let state_var = match &definition.state {
                Some(spec) => {
                    let label = node
                        .prop("label")
                        .filter(|v| v.is_truthy())
                        .map(|v| v.to_literal());
                    let name = plan.state.declare(
                        label.as_deref(),
                        &resolved,
                        spec,
                        &self.config.default_error_message,
                    );
                    if definition.is_password_field(&resolved) {
                        plan.password_vars.push(name.clone());
                    }
                    name
                }
                None => String::new(),
            };

            plan.fragments
                .push(definition.generate_jsx(&resolved, &state_var));
        }

        plan
    }

    fn push_imports(&self, lines: &mut Vec<String>, plan: &ScreenPlan) {
        let mut rn_imports = RN_IMPORTS.to_vec();
        if plan.submits {
            rn_imports.push("Alert");
        }

        lines.push("import React, { useState } from 'react';".to_string());
        lines.push(format!(
            "import {{ {} }} from 'react-native';",
            rn_imports.join(", ")
        ));
        lines.push("import { SafeAreaProvider } from 'react-native-safe-area-context';".to_string());

        if !plan.imports.is_empty() {
            lines.push(String::new());
            for import in &plan.imports {
                lines.push(format!("import {} from './{}';", import, import));
            }
        }
    }

    fn push_submit_handler(&self, lines: &mut Vec<String>, plan: &ScreenPlan) {
        let rules = plan.state.rules();
        let password_pair = match plan.password_vars.as_slice() {
            [first, second, ..] => Some((first, second)),
            _ => None,
        };

        lines.push("  const handleSubmit = () => {".to_string());

        if !rules.is_empty() || password_pair.is_some() {
            lines.push("    let isValid = true;".to_string());
            lines.push(String::new());

            if !rules.is_empty() {
                for rule in rules {
                    lines.push(format!("    {}('');", setter_name(&rule.error_var())));
                }
                lines.push(String::new());
            }

            for rule in rules {
                let condition = match rule.state_type {
                    StateType::Text => format!("!{}.trim()", rule.var_name),
                    StateType::Date => format!("!{}", rule.var_name),
                    StateType::Boolean => continue,
                };
                lines.push(format!("    if ({}) {{", condition));
                lines.push(format!(
                    "      {}('{}');",
                    setter_name(&rule.error_var()),
                    escape_quotes(&rule.error_message)
                ));
                lines.push("      isValid = false;".to_string());
                lines.push("    }".to_string());
            }

            // Only the first two password fields are compared.
            if let Some((first, second)) = password_pair {
                lines.push(format!("    if ({} !== {}) {{", first, second));
                lines.push(format!(
                    "      Alert.alert('Error', '{}');",
                    escape_quotes(&self.config.mismatch_message)
                ));
                lines.push("      isValid = false;".to_string());
                lines.push("    }".to_string());
            }

            lines.push(String::new());
            lines.push("    if (!isValid) return;".to_string());
            lines.push(String::new());
        }

        lines.push(format!(
            "    Alert.alert('Success', '{}');",
            escape_quotes(&self.config.success_message)
        ));
        lines.push("  };".to_string());
        lines.push(String::new());
    }

    fn push_stylesheet(&self, lines: &mut Vec<String>, plan: &ScreenPlan) {
        lines.push("const styles = StyleSheet.create({".to_string());
        self.push_style_block(lines, STYLES_BASE);
        if plan.style_blocks.contains(&StyleBlock::SwitchRow) {
            self.push_style_block(lines, STYLES_SWITCH_ROW);
        }
        if plan.style_blocks.contains(&StyleBlock::ButtonText) {
            self.push_style_block(lines, STYLES_BUTTON_TEXT);
        }
        lines.push("});".to_string());
    }

    fn push_style_block(&self, lines: &mut Vec<String>, template: &str) {
        match self.engine.render(template, &self.config.style) {
            Ok(block) => lines.extend(block.lines().map(str::to_string)),
            Err(err) => tracing::error!(%err, template, "failed to render style block"),
        }
    }
}

impl Default for ScreenGenerator {
    fn default() -> Self {
        Self::with_builtin()
    }
}

/// Escape single quotes for a single-quoted string literal.
fn escape_quotes(message: &str) -> String {
    message.replace('\'', "\\'")
}

fn shared() -> &'static ScreenGenerator {
    static GENERATOR: OnceLock<ScreenGenerator> = OnceLock::new();
    GENERATOR.get_or_init(ScreenGenerator::with_builtin)
}

/// Generate a screen with the built-in definitions and default settings.
pub fn generate_screen_code(nodes: &[CanvasNode], screen_name: &str) -> String {
    shared().generate(nodes, screen_name)
}

/// Import names needed by `nodes`, using the built-in definitions.
pub fn required_files(nodes: &[CanvasNode]) -> Vec<String> {
    shared().required_files(nodes)
}

/// File names needed by `nodes`, using the built-in definitions.
pub fn required_file_names(nodes: &[CanvasNode]) -> Vec<String> {
    shared().required_file_names(nodes)
}
