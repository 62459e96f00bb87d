use serde::{Deserialize, Serialize};

use userd_core::UserId;

use crate::Scope;

/// Authenticated-identity record loaded for credential checks.
///
/// This is what the HTTP boundary's authentication middleware works with: it
/// carries the stored password hash for verification and the granted scope
/// names for endpoint policy. It never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalRecord {
    pub user_id: UserId,
    pub username: String,
    pub password_hash: String,
    pub scopes: Vec<Scope>,
}

impl PrincipalRecord {
    pub fn has_scope(&self, scope: &Scope) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}
