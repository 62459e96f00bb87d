//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (lookups,
/// uniqueness, credentials, validation). The HTTP boundary maps each variant
/// to exactly one status code; message strings are the only detail that
/// crosses that boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested record (user, role) does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint would be violated (duplicate username/email).
    #[error("{0}")]
    Conflict(String),

    /// Credential check failed.
    #[error("{0}")]
    Unauthorized(String),

    /// A value failed validation (e.g. malformed input).
    #[error("{0}")]
    Validation(String),

    /// The request carried an unacceptable content type.
    #[error("{0}")]
    Unsupported(String),

    /// Any uncaught fault.
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
