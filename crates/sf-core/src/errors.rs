//! Cross-cutting error types for the storefront.
//!
//! Crate-specific errors (`ConfigError`, `BackendError`) live in their own
//! crates. The HTTP-facing `AppError` is defined in `sf-server`, where all
//! crate errors converge.

use thiserror::Error;

/// Errors raised by core type conversions.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation. The message is shown to API callers as-is.
    #[error("{0}")]
    Validation(String),
}
