//! `userd-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod role;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use id::{RoleId, UserId};
pub use role::Role;
pub use user::User;
