//! Error handling
//!
//! Centralized error types using thiserror. All fallible operations in the
//! crate return these for consistency.

use thiserror::Error;

/// Main error type for the wizard.
#[derive(Error, Debug)]
pub enum AppforgeError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template backend errors (unreachable backend, rejected request)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Validation errors (project name, output path)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for wizard operations.
pub type Result<T> = std::result::Result<T, AppforgeError>;

impl AppforgeError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
