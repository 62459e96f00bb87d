use userd_auth::{PrincipalRecord, Scope};
use userd_core::UserId;

/// Principal context for a request (authenticated identity + scopes).
///
/// Inserted by the authentication middleware; must be present for all
/// protected routes.
#[derive(Debug, Clone)]
pub struct PrincipalContext {
    record: PrincipalRecord,
}

impl PrincipalContext {
    pub fn new(record: PrincipalRecord) -> Self {
        Self { record }
    }

    pub fn user_id(&self) -> &UserId {
        &self.record.user_id
    }

    pub fn username(&self) -> &str {
        &self.record.username
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.record.scopes
    }
}
