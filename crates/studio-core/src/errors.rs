//! Error types for the studio core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by canvas editing and design encoding.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("No node with id '{0}' on the canvas")]
    NodeNotFound(String),

    #[error("Invalid saved design: {0}")]
    InvalidDesign(#[from] serde_json::Error),
}
