//! Role directory.

use userd_core::{DomainError, DomainResult, Role};
use userd_store::DocumentStore;

/// Resolves role names to role records and owns role creation.
///
/// Roles are immutable after creation and are never deleted here. Creation
/// performs no duplicate-name check; the store does not enforce name
/// uniqueness below the application layer, so two roles may share a name.
#[derive(Clone)]
pub struct RoleDirectory<S> {
    store: S,
}

impl<S> RoleDirectory<S>
where
    S: DocumentStore<Role>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create and persist a role with a fresh identifier.
    pub fn create_role(&self, role_name: &str) -> Role {
        let role = Role::new(role_name);
        self.store.save(role.clone());
        tracing::info!(role_id = %role.id, role_name, "role created");
        role
    }

    pub fn get_role(&self, id: &str) -> DomainResult<Role> {
        self.store
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found(format!("Unable to find role with id: {id}")))
    }

    /// All roles, in store iteration order.
    pub fn list_roles(&self) -> Vec<Role> {
        self.store.find_all()
    }

    pub fn find_by_name(&self, role_name: &str) -> Option<Role> {
        self.store.find_by(&|r: &Role| r.role_name == role_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use userd_store::InMemoryStore;

    fn directory() -> RoleDirectory<Arc<InMemoryStore<Role>>> {
        RoleDirectory::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn created_role_is_listed_exactly_once() {
        let roles = directory();
        let created = roles.create_role("ADMIN");

        let all = roles.list_roles();
        assert_eq!(all.iter().filter(|r| r.id == created.id).count(), 1);
    }

    #[test]
    fn get_role_by_id() {
        let roles = directory();
        let created = roles.create_role("USER");

        let fetched = roles.get_role(created.id.as_str()).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_missing_role_is_not_found() {
        let roles = directory();
        let err = roles.get_role("no-such-id").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn find_by_name_resolves_created_roles() {
        let roles = directory();
        roles.create_role("ADMIN");
        roles.create_role("USER");

        assert_eq!(roles.find_by_name("USER").unwrap().role_name, "USER");
        assert!(roles.find_by_name("GUEST").is_none());
    }
}
