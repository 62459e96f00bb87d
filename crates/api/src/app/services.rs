//! Service wiring for the HTTP boundary.

use std::sync::Arc;

use userd_auth::{BcryptHasher, CredentialHasher};
use userd_core::{DomainResult, Role, User};
use userd_directory::{AuthGate, RoleDirectory, UserDirectory};
use userd_store::InMemoryStore;

pub type UserStore = Arc<InMemoryStore<User>>;
pub type RoleStore = Arc<InMemoryStore<Role>>;

/// The directories and gate shared by all handlers.
pub struct AppServices {
    pub users: UserDirectory<UserStore, RoleStore>,
    pub roles: RoleDirectory<RoleStore>,
    pub gate: AuthGate<UserStore, RoleStore>,
}

impl AppServices {
    /// Wire the directories over fresh in-memory collections.
    ///
    /// The hasher is injectable so tests can lower the bcrypt work factor.
    pub fn new(hasher: Arc<dyn CredentialHasher>) -> Self {
        let user_store: UserStore = Arc::new(InMemoryStore::new());
        let role_store: RoleStore = Arc::new(InMemoryStore::new());

        let roles = RoleDirectory::new(role_store);
        let users = UserDirectory::new(user_store, roles.clone(), hasher.clone());
        let gate = AuthGate::new(users.clone(), hasher);

        Self { users, roles, gate }
    }
}

/// Production wiring: bcrypt at its default cost.
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(BcryptHasher::new()))
}

/// Seed the "ADMIN" role and an admin user when none exist yet.
///
/// Role-management endpoints require an ADMIN principal, so a fresh
/// deployment needs one account minted outside the public API.
pub fn bootstrap_admin(services: &AppServices, username: &str, password: &str) -> DomainResult<()> {
    if services.roles.find_by_name("ADMIN").is_none() {
        services.roles.create_role("ADMIN");
    }

    if services.users.get_user_by_username(username).is_ok() {
        return Ok(());
    }

    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| format!("{username}@localhost.local"));
    let user = services
        .users
        .create_user(username, &email, password, &["ADMIN".to_string()])?;
    tracing::info!(user_id = %user.id, username, "bootstrapped admin user");
    Ok(())
}
