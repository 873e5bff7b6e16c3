//! Error types for the stepdeck CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, catalog loading, rendering, and
//! the local variable/checklist stores.

use thiserror::Error;

/// Unified error type for the stepdeck CLI.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated. Note that the
/// two core engines (template rendering and catalog search) are total
/// functions and do not produce errors at all; `AppError` covers the loading,
/// validation, and persistence around them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog loading and validation errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Prompt rendering errors (bad step/prompt references, not render itself)
    #[error("Render error: {0}")]
    Render(String),

    /// Variable and checklist store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
