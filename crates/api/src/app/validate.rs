//! Explicit per-request validation.
//!
//! Each request shape gets one function returning an ordered list of
//! `field: message` violations; handlers run it before touching the
//! directories and answer 400 with the full list when it is non-empty.

use crate::app::dto::{
    CreateRoleRequest, CreateUserRequest, UpdatePasswordRequest, UpdateUserRequest,
};

pub fn validate_create_user(req: &CreateUserRequest) -> Vec<String> {
    let mut violations = Vec::new();
    check_username(&req.username, &mut violations);
    check_email(&req.email, &mut violations);
    if req.password.trim().is_empty() {
        violations.push("password: Password must be provided!".to_string());
    }
    if req.role_names.is_empty() {
        violations.push("roleNames: Role Name must be provided!".to_string());
    }
    violations
}

pub fn validate_update_user(req: &UpdateUserRequest) -> Vec<String> {
    let mut violations = Vec::new();
    if req.id.is_empty() {
        violations.push("id: User Id must be specified!".to_string());
    }
    check_username(&req.username, &mut violations);
    check_email(&req.email, &mut violations);
    violations
}

pub fn validate_update_password(req: &UpdatePasswordRequest) -> Vec<String> {
    let mut violations = Vec::new();
    if req.id.is_empty() {
        violations.push("id: User Id must be specified!".to_string());
    }
    if req.current_password.trim().is_empty() {
        violations.push("currentPassword: Current Password must be provided!".to_string());
    }
    if req.new_password.trim().is_empty() {
        violations.push("newPassword: New Password must be provided!".to_string());
    }
    violations
}

pub fn validate_create_role(req: &CreateRoleRequest) -> Vec<String> {
    let mut violations = Vec::new();
    if req.role_name.trim().is_empty() {
        violations.push("roleName: Role Name must be provided!".to_string());
    }
    violations
}

fn check_username(username: &str, violations: &mut Vec<String>) {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        violations.push("username: Username must be provided!".to_string());
    } else if !(5..=25).contains(&trimmed.chars().count()) {
        violations.push("username: Username must be between 5 to 25 characters long!".to_string());
    }
}

fn check_email(email: &str, violations: &mut Vec<String>) {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        violations.push("email: Email must be provided!".to_string());
    } else if !is_valid_email(trimmed) {
        violations.push("email: Invalid email format!".to_string());
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain with
/// non-empty labels, no whitespace.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
