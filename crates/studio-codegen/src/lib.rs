//! Screen code generation from Form Studio canvas designs.
//!
//! This crate turns an ordered list of canvas nodes into a React Native
//! screen: imports, `useState` declarations, a submit handler with
//! required-field validation, the JSX tree and a stylesheet.
//!
//! Generation is infallible. Unknown component types are dropped and an
//! empty canvas yields a placeholder comment.
//!
//! # Example
//!
//! ```
//! use studio_codegen::generate_screen_code;
//! use studio_core::CanvasNode;
//!
//! let nodes = vec![
//!     CanvasNode::new("node_0", "input-text", 0)
//!         .with_prop("label", "Full Name")
//!         .with_prop("required", true),
//!     CanvasNode::new("node_1", "rainbow-button", 1),
//! ];
//! let code = generate_screen_code(&nodes, "SignUpScreen");
//! assert!(code.contains("if (!fullName.trim()) {"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod state;
pub mod templates;

pub use config::{GeneratorConfig, ScreenStyle};
pub use error::{CodegenError, Result};
pub use generator::{generate_screen_code, required_file_names, required_files, ScreenGenerator};
pub use naming::{screen_identifier, to_var_name};
pub use state::{StateTable, StateVar, ValidationRule};
pub use studio_registry::capitalize;
pub use templates::TemplateEngine;
