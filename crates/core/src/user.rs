//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// A registered user.
///
/// # Invariants
/// - `username` and `email` are each globally unique across all users
///   (enforced by the user directory at creation time).
/// - `password_hash` only ever holds a salted one-way hash; the plaintext is
///   discarded after hashing and must never be persisted or logged.
/// - Roles are embedded by value, resolved by name at assignment time; a
///   user does not own its roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Role names granted to this user, in assignment order.
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.role_name.clone()).collect()
    }
}
