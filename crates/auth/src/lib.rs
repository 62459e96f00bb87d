//! `userd-auth` — credential hashing and authorization primitives.

pub mod authorize;
pub mod hasher;
pub mod principal;
pub mod scope;

pub use authorize::{require_scope, AuthzError};
pub use hasher::{BcryptHasher, CredentialHasher};
pub use principal::PrincipalRecord;
pub use scope::{Scope, ADMIN};
