use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Authorization tag granted to a principal.
///
/// Scopes are intentionally opaque strings at this layer: they mirror role
/// names, and roles are created dynamically at runtime, so the set of valid
/// scopes is finite but extensible rather than an enum baked into code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(Cow<'static, str>);

impl Scope {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Scope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scope gating the role-management endpoints.
pub const ADMIN: Scope = Scope::from_static("ADMIN");
