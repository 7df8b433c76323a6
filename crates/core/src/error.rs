//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised when malformed data tries to enter the domain (construction of
/// items, slugs, prices, windows). Classification and formatting never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated (e.g. duplicate slug in one catalog).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A slug was not usable as a route segment.
    #[error("invalid slug: {0}")]
    InvalidSlug(String),

    /// A requested catalog item was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_slug(msg: impl Into<String>) -> Self {
        Self::InvalidSlug(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
