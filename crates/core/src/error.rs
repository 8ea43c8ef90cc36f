//! Core error model.

use thiserror::Error;

/// Result type used across the core layer.
pub type CoreResult<T> = Result<T, CoreError>;

/// Core-level error.
///
/// Deterministic failures only (validation, lookups). Transport and storage
/// concerns live in their own crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
