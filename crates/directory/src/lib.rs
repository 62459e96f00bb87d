//! `userd-directory` — user and role lifecycle orchestration.
//!
//! The directories own entity lifecycles on top of the document store: the
//! role directory resolves names to role records, the user directory
//! enforces uniqueness and role-resolution invariants, and the gate turns
//! credentials into an authenticated principal.

pub mod gate;
pub mod roles;
pub mod users;

pub use gate::AuthGate;
pub use roles::RoleDirectory;
pub use users::UserDirectory;
