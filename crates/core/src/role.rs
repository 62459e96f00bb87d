use serde::{Deserialize, Serialize};

use crate::RoleId;

/// A named role shared across users.
///
/// Roles are immutable after creation: there is no update operation and no
/// delete path in this service. Users embed roles by value; the store does
/// not enforce referential integrity between the two collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub role_name: String,
}

impl Role {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            id: RoleId::new(),
            role_name: role_name.into(),
        }
    }
}
