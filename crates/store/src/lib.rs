//! `userd-store` — generic document persistence.
//!
//! The service treats persistence as a generic document store: two entity
//! collections (users, roles) keyed by opaque string identifiers. The trait
//! here is the seam a real database adapter would implement; the in-memory
//! implementation backs dev/test deployments.

pub mod document;
pub mod memory;

pub use document::{Document, DocumentStore};
pub use memory::InMemoryStore;
