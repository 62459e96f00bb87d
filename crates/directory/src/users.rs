//! User directory.

use std::sync::Arc;

use chrono::Utc;

use userd_auth::{CredentialHasher, PrincipalRecord, Scope};
use userd_core::{DomainError, DomainResult, Role, User, UserId};
use userd_store::DocumentStore;

use crate::RoleDirectory;

/// Orchestrates the user lifecycle: creation, lookup, update, password
/// change, deletion.
///
/// # Invariants
/// - `username` and `email` are each checked for uniqueness against their
///   own field before a user is created.
/// - Every role name must resolve through the role directory before the
///   user is persisted; nothing is written on a failed resolution.
/// - Plaintext passwords exist only transiently; the directory persists and
///   logs hashes exclusively.
#[derive(Clone)]
pub struct UserDirectory<US, RS> {
    users: US,
    roles: RoleDirectory<RS>,
    hasher: Arc<dyn CredentialHasher>,
}

impl<US, RS> UserDirectory<US, RS>
where
    US: DocumentStore<User>,
    RS: DocumentStore<Role>,
{
    pub fn new(users: US, roles: RoleDirectory<RS>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            users,
            roles,
            hasher,
        }
    }

    /// All users, in store iteration order.
    pub fn list_users(&self) -> Vec<User> {
        self.users.find_all()
    }

    pub fn get_user_by_id(&self, id: &str) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found(format!("Unable to find user with id: {id}")))
    }

    pub fn get_user_by_username(&self, username: &str) -> DomainResult<User> {
        self.users
            .find_by(&|u: &User| u.username == username)
            .ok_or_else(|| {
                DomainError::not_found(format!("Unable to find user with username: {username}"))
            })
    }

    /// Register a new user.
    ///
    /// Username and email are each checked against their own field; all role
    /// names resolve before anything is written. Concurrent registrations
    /// can still race the check-then-write (the store holds no unique
    /// index).
    pub fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role_names: &[String],
    ) -> DomainResult<User> {
        let username = username.trim();
        let email = email.trim().to_lowercase();

        if self
            .users
            .find_by(&|u: &User| u.username == username)
            .is_some()
        {
            return Err(DomainError::conflict(format!(
                "User with username: {username} already registered"
            )));
        }
        if self.users.find_by(&|u: &User| u.email == email).is_some() {
            return Err(DomainError::conflict(format!(
                "User with email: {email} already registered"
            )));
        }

        let mut roles = Vec::with_capacity(role_names.len());
        for name in role_names {
            let role = self.roles.find_by_name(name).ok_or_else(|| {
                DomainError::not_found(format!("No role with roleName: {name} exists"))
            })?;
            roles.push(role);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: username.to_string(),
            email,
            password_hash: self.hasher.hash(password)?,
            roles,
            created_at: now,
            updated_at: now,
        };

        self.users.save(user.clone());
        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Overwrite a user's username and email; password and roles untouched.
    ///
    /// Uniqueness of the new values is not re-checked against other users
    /// (carried behavior of the source system).
    pub fn update_user(&self, id: &str, username: &str, email: &str) -> DomainResult<User> {
        let mut user = self.get_user_by_id(id)?;
        user.username = username.trim().to_string();
        user.email = email.trim().to_lowercase();
        user.updated_at = Utc::now();

        self.users.save(user.clone());
        Ok(user)
    }

    /// Change a user's password after verifying the current one.
    pub fn update_password(
        &self,
        id: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<User> {
        let mut user = self.get_user_by_id(id)?;

        if !self.hasher.verify(current_password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "password change rejected: current password mismatch");
            return Err(DomainError::unauthorized("Incorrect Password"));
        }

        user.password_hash = self.hasher.hash(new_password)?;
        user.updated_at = Utc::now();

        self.users.save(user.clone());
        tracing::info!(user_id = %user.id, "password updated");
        Ok(user)
    }

    pub fn delete_user(&self, id: &str) -> DomainResult<()> {
        let user = self.get_user_by_id(id)?;
        self.users.delete(user.id.as_str());
        tracing::info!(user_id = %user.id, "user deleted");
        Ok(())
    }

    /// Credential-lookup hook for the authentication middleware.
    ///
    /// Role names become the principal's authorization scopes.
    pub fn load_principal_by_username(&self, username: &str) -> DomainResult<PrincipalRecord> {
        let user = self
            .users
            .find_by(&|u: &User| u.username == username)
            .ok_or_else(|| {
                DomainError::unauthorized(format!("User with username: {username} not found!"))
            })?;

        Ok(PrincipalRecord {
            user_id: user.id.clone(),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            scopes: user
                .roles
                .iter()
                .map(|r| Scope::new(r.role_name.clone()))
                .collect(),
        })
    }
}
