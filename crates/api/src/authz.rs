//! API-side authorization guard.
//!
//! Scope checks happen at the route boundary, before a handler touches the
//! directories; the directories themselves stay auth-agnostic.

use axum::http::StatusCode;
use axum::response::Response;

use userd_auth::{require_scope, ADMIN};

use crate::app::errors::failure_response;
use crate::context::PrincipalContext;

/// Require the "ADMIN" scope for role-management endpoints.
pub fn require_admin(principal: &PrincipalContext) -> Result<(), Response> {
    require_scope(principal.scopes(), &ADMIN)
        .map_err(|e| failure_response(StatusCode::FORBIDDEN, vec![e.to_string()]))
}
