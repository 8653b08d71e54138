//! Error types for code generation.
//!
//! Screen generation itself never fails; these cover template setup and
//! configuration loading.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur around code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
