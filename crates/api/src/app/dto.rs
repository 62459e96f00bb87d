//! Request/response DTOs and conversions from domain entities.
//!
//! Wire shapes are explicit: conversion functions map domain entities to
//! responses (the password hash never appears in any response shape).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use userd_core::{Role, User};

// -------------------------
// Request DTOs
// -------------------------
//
// Fields default so a missing field reaches the validation layer (which
// answers with a field-level message) instead of failing deserialization.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role_names: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    #[serde(default)]
    pub role_name: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub id: String,
    pub role_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<RoleResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn role_to_response(role: Role) -> RoleResponse {
    RoleResponse {
        id: role.id.into_string(),
        role_name: role.role_name,
    }
}

pub fn user_to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id.into_string(),
        username: user.username,
        email: user.email,
        roles: user.roles.into_iter().map(role_to_response).collect(),
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use userd_core::UserId;

    #[test]
    fn user_response_never_carries_the_hash() {
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: "alice1".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
            roles: vec![Role::new("USER")],
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(user_to_response(user)).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
        assert_eq!(value["username"], "alice1");
        assert_eq!(value["roles"][0]["roleName"], "USER");
    }

    #[test]
    fn requests_tolerate_missing_fields() {
        let req: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.role_names.is_empty());
    }

    #[test]
    fn requests_use_camel_case_keys() {
        let req: UpdatePasswordRequest = serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "currentPassword": "old",
            "newPassword": "new",
        }))
        .unwrap();
        assert_eq!(req.current_password, "old");
        assert_eq!(req.new_password, "new");
    }
}
