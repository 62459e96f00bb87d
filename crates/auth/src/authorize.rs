//! Scope checks for role-gated endpoints.
//!
//! Authorization happens at the HTTP boundary, before a handler touches the
//! directories. Domain components stay auth-agnostic.

use thiserror::Error;

use crate::Scope;

/// Authorization failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    #[error("missing required scope: {0}")]
    MissingScope(String),
}

/// Require that the granted scopes include `required`.
pub fn require_scope(granted: &[Scope], required: &Scope) -> Result<(), AuthzError> {
    if granted.iter().any(|s| s == required) {
        return Ok(());
    }
    Err(AuthzError::MissingScope(required.as_str().to_string()))
}
