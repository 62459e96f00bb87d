//! Authentication gate.

use std::sync::Arc;

use userd_auth::{CredentialHasher, PrincipalRecord};
use userd_core::{DomainError, DomainResult, Role, User};
use userd_store::DocumentStore;

use crate::UserDirectory;

/// Validates incoming credentials against the user directory and the
/// credential hasher.
///
/// The HTTP boundary's authentication middleware calls this once per
/// protected request; the resulting principal's scopes feed endpoint
/// policy.
#[derive(Clone)]
pub struct AuthGate<US, RS> {
    users: UserDirectory<US, RS>,
    hasher: Arc<dyn CredentialHasher>,
}

impl<US, RS> AuthGate<US, RS>
where
    US: DocumentStore<User>,
    RS: DocumentStore<Role>,
{
    pub fn new(users: UserDirectory<US, RS>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> DomainResult<PrincipalRecord> {
        let record = self.users.load_principal_by_username(username)?;

        if !self.hasher.verify(password, &record.password_hash) {
            tracing::warn!(username, "authentication failed");
            return Err(DomainError::unauthorized("Bad credentials"));
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoleDirectory;
    use userd_auth::BcryptHasher;
    use userd_store::InMemoryStore;

    fn gate() -> AuthGate<Arc<InMemoryStore<User>>, Arc<InMemoryStore<Role>>> {
        let roles = RoleDirectory::new(Arc::new(InMemoryStore::new()));
        roles.create_role("ADMIN");

        let hasher: Arc<dyn CredentialHasher> = Arc::new(BcryptHasher::with_cost(4));
        let users = UserDirectory::new(Arc::new(InMemoryStore::new()), roles, hasher.clone());
        users
            .create_user("admin1", "admin@x.com", "Adm1n!", &["ADMIN".to_string()])
            .unwrap();

        AuthGate::new(users, hasher)
    }

    #[test]
    fn valid_credentials_yield_a_principal() {
        let gate = gate();
        let record = gate.authenticate("admin1", "Adm1n!").unwrap();
        assert_eq!(record.username, "admin1");
        assert!(record.has_scope(&userd_auth::ADMIN));
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let gate = gate();
        assert!(matches!(
            gate.authenticate("admin1", "nope").unwrap_err(),
            DomainError::Unauthorized(_)
        ));
    }

    #[test]
    fn unknown_username_is_unauthorized() {
        let gate = gate();
        assert!(matches!(
            gate.authenticate("ghost", "Adm1n!").unwrap_err(),
            DomainError::Unauthorized(_)
        ));
    }
}
