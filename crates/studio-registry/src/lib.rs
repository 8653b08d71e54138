//! Component definition table for the Form Studio.
//!
//! This crate handles:
//! - Definition metadata (palette info, prop controls, state requirements)
//! - The closed set of JSX templates definitions render with
//! - The built-in definitions and lookup by type

mod builtin;
mod definition;
mod registry;
mod templates;

pub use definition::{
    Category, ComponentDefinition, DefinitionBuilder, StateSpec, StateType, StyleBlock,
};
pub use registry::{DefinitionRegistry, PaletteGroup};
pub use templates::{capitalize, setter_name, JsxTemplate};
