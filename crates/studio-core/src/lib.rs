//! Core types and the canvas editing model for the Form Studio.
//!
//! This crate provides the foundational types shared by the other studio crates:
//! - Property values with JavaScript-compatible truthiness and formatting
//! - Canvas nodes and prop-control descriptors
//! - The canvas editing model (add, edit, reorder, remove)
//! - Saved-design encoding with a time-to-live
//! - Error types

pub mod canvas;
pub mod design;
pub mod errors;
pub mod node;
pub mod types;

pub use canvas::Canvas;
pub use design::{restore_nodes, DesignConfig, SavedDesign};
pub use errors::{CoreError, Result};
pub use node::{CanvasNode, ControlKind, PropControl, SelectOption};
pub use types::{PropMap, PropValue};
