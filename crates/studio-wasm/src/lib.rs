//! WebAssembly bindings for the Form Studio.
//!
//! This crate provides the JavaScript/TypeScript API the builder UI uses:
//! a stateful canvas with code generation, plus standalone functions.
//!
//! ## Example
//!
//! ```js
//! import { StudioEngine } from 'form-studio';
//!
//! const engine = new StudioEngine();
//!
//! // Drop components onto the canvas
//! const node = engine.addNode('input-text');
//! engine.setProp(node.id, 'required', true);
//! engine.addNode('rainbow-button');
//!
//! // Generate the screen and the list of files to copy
//! const code = engine.generateScreenCode('SignUpScreen');
//! const files = engine.requiredFileNames();
//!
//! // Persist for an hour
//! localStorage.setItem(engine.storageKey(), engine.saveDesign(Date.now()));
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use studio_codegen::{screen_identifier, ScreenGenerator};
use studio_core::{restore_nodes, Canvas, CanvasNode, DesignConfig, PropMap, PropValue, SavedDesign};

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The main Form Studio interface for JavaScript.
#[wasm_bindgen]
pub struct StudioEngine {
    canvas: Canvas,
    generator: ScreenGenerator,
    design: DesignConfig,
}

#[wasm_bindgen]
impl StudioEngine {
    /// Create an engine with an empty canvas and the built-in components.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            generator: ScreenGenerator::with_builtin(),
            design: DesignConfig::default(),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Palette groups with their component definitions.
    #[wasm_bindgen]
    pub fn palette(&self) -> Result<JsValue, JsError> {
        to_js(&self.generator.registry().palette())
    }

    /// Register an extra component definition.
    #[wasm_bindgen(js_name = registerComponent)]
    pub fn register_component(&mut self, definition: JsValue) -> Result<(), JsError> {
        let def: ComponentDefinitionJs = serde_wasm_bindgen::from_value(definition)
            .map_err(|e| JsError::new(&format!("Invalid component definition: {}", e)))?;

        let definition = def
            .into_core()
            .map_err(|e| JsError::new(&format!("Invalid component definition: {}", e)))?;
        self.generator.registry_mut().register(definition);
        Ok(())
    }

    /// Place a component at the bottom of the canvas, with default props.
    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node(&mut self, component_type: &str) -> Result<JsValue, JsError> {
        let node = self
            .place(component_type)
            .ok_or_else(|| JsError::new(&format!("Unknown component type: {}", component_type)))?;
        to_js(node)
    }

    /// Remove a node. Returns `false` if no node has this id.
    #[wasm_bindgen(js_name = removeNode)]
    pub fn remove_node(&mut self, id: &str) -> bool {
        self.canvas.remove(id).is_some()
    }

    /// Replace all props of a node.
    #[wasm_bindgen(js_name = updateProps)]
    pub fn update_props(&mut self, id: &str, props: JsValue) -> Result<(), JsError> {
        let props: PropMap = serde_wasm_bindgen::from_value(props)
            .map_err(|e| JsError::new(&format!("Invalid props: {}", e)))?;

        self.canvas
            .update_props(id, props)
            .map_err(|e| JsError::new(&format!("Update error: {}", e)))
    }

    /// Set a single prop of a node.
    #[wasm_bindgen(js_name = setProp)]
    pub fn set_prop(&mut self, id: &str, name: &str, value: JsValue) -> Result<(), JsError> {
        let value: PropValue = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsError::new(&format!("Invalid prop value: {}", e)))?;

        self.canvas
            .set_prop(id, name, value)
            .map_err(|e| JsError::new(&format!("Update error: {}", e)))
    }

    /// Move a node to the position of another (drag and drop).
    #[wasm_bindgen(js_name = moveNode)]
    pub fn move_node(&mut self, active_id: &str, over_id: &str) -> bool {
        self.canvas.move_node(active_id, over_id)
    }

    /// Remove every node.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Nodes currently on the canvas.
    #[wasm_bindgen]
    pub fn nodes(&self) -> Result<JsValue, JsError> {
        to_js(self.canvas.nodes())
    }

    /// Replace the canvas with the given nodes.
    #[wasm_bindgen(js_name = loadNodes)]
    pub fn load_nodes(&mut self, nodes: JsValue) -> Result<(), JsError> {
        let nodes: Vec<CanvasNode> = serde_wasm_bindgen::from_value(nodes)
            .map_err(|e| JsError::new(&format!("Invalid nodes: {}", e)))?;

        self.canvas = Canvas::from_nodes(nodes);
        Ok(())
    }

    /// Generate the screen source for the current canvas.
    #[wasm_bindgen(js_name = generateScreenCode)]
    pub fn generate_screen_code(&self, screen_name: &str) -> String {
        self.generator.generate(self.canvas.nodes(), screen_name)
    }

    /// Import names the current screen depends on.
    #[wasm_bindgen(js_name = requiredFiles)]
    pub fn required_files(&self) -> Vec<String> {
        self.generator.required_files(self.canvas.nodes())
    }

    /// Component files to copy alongside the screen.
    #[wasm_bindgen(js_name = requiredFileNames)]
    pub fn required_file_names(&self) -> Vec<String> {
        self.generator.required_file_names(self.canvas.nodes())
    }

    /// Storage key the design should be saved under.
    #[wasm_bindgen(js_name = storageKey)]
    pub fn storage_key(&self) -> String {
        self.design.storage_key.clone()
    }

    /// Encode the canvas for storage, expiring after the configured time.
    #[wasm_bindgen(js_name = saveDesign)]
    pub fn save_design(&self, now_ms: f64) -> Result<String, JsError> {
        self.snapshot(now_ms as u64)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Restore the canvas from a stored design.
    ///
    /// Expired or unreadable designs leave an empty canvas.
    #[wasm_bindgen(js_name = restoreDesign)]
    pub fn restore_design(&mut self, raw: &str, now_ms: f64) -> Result<JsValue, JsError> {
        to_js(&self.restore(raw, now_ms as u64))
    }

    /// Set generator options.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsError> {
        let config: GeneratorConfigJs = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;

        self.generator.set_config(config.into_core());
        Ok(())
    }

    /// Set how long saved designs stay valid.
    #[wasm_bindgen(js_name = setDesignTtl)]
    pub fn set_design_ttl(&mut self, minutes: u32) {
        self.design.ttl_minutes = u64::from(minutes);
    }
}

impl StudioEngine {
    fn place(&mut self, component_type: &str) -> Option<&CanvasNode> {
        let props = self
            .generator
            .registry()
            .get(component_type)?
            .default_props();
        Some(self.canvas.add(component_type, props))
    }

    fn snapshot(&self, now_ms: u64) -> studio_core::Result<String> {
        SavedDesign::new(self.canvas.nodes().to_vec(), now_ms, self.design.ttl_minutes).to_json()
    }

    fn restore(&mut self, raw: &str, now_ms: u64) -> RestoreResultJs {
        let nodes = restore_nodes(raw, now_ms);
        let expired = nodes.is_empty()
            && SavedDesign::from_json(raw).is_ok_and(|design| design.is_expired(now_ms));

        self.canvas = Canvas::from_nodes(nodes);
        RestoreResultJs {
            restored: self.canvas.len(),
            expired,
        }
    }
}

impl Default for StudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize to a plain JS object (maps as objects, not `Map`).
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Standalone function to generate a screen with the built-in components.
#[wasm_bindgen(js_name = generateScreenCode)]
pub fn generate_screen_code_standalone(nodes: JsValue, screen_name: &str) -> Result<String, JsError> {
    let nodes: Vec<CanvasNode> = serde_wasm_bindgen::from_value(nodes)
        .map_err(|e| JsError::new(&format!("Invalid nodes: {}", e)))?;

    Ok(studio_codegen::generate_screen_code(&nodes, screen_name))
}

/// Standalone function listing the component files a screen needs.
///
/// Returns file names (`CustomInput.tsx`), the shape the builder UI shows.
/// `StudioEngine.requiredFiles` returns the bare import names instead.
#[wasm_bindgen(js_name = getRequiredFiles)]
pub fn get_required_files(nodes: JsValue) -> Result<Vec<String>, JsError> {
    let nodes: Vec<CanvasNode> = serde_wasm_bindgen::from_value(nodes)
        .map_err(|e| JsError::new(&format!("Invalid nodes: {}", e)))?;

    Ok(studio_codegen::required_file_names(&nodes))
}

/// Turn free text into a component name usable as `screenName`.
#[wasm_bindgen(js_name = sanitizeScreenName)]
pub fn sanitize_screen_name(raw: &str) -> String {
    screen_identifier(raw, "MyScreen")
}

/// Get the engine version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
