//! Sources for the raw admin API key.
//!
//! The key is looked up on every request and never cached.

use std::env;

/// Environment variable holding `<id>:<hex secret>`.
pub const ADMIN_KEY_ENV: &str = "GHOST_ADMIN_API_KEY";

/// Supplies the raw admin key for a request.
pub trait KeySource: Send + Sync {
    /// Returns the raw key, or `None` when it is not configured.
    fn admin_key(&self) -> Option<String>;
}

/// Reads the key from the process environment on each call.
#[derive(Debug, Clone)]
pub struct EnvKeySource {
    var: String,
}

impl EnvKeySource {
    #[must_use]
    pub fn new() -> Self {
        Self::with_var(ADMIN_KEY_ENV)
    }

    #[must_use]
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for EnvKeySource {
    fn admin_key(&self) -> Option<String> {
        env::var(&self.var).ok()
    }
}

/// Fixed key, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticKeySource {
    key: Option<String>,
}

impl StaticKeySource {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: Some(key.into()) }
    }

    /// A source with no key configured.
    #[must_use]
    pub fn missing() -> Self {
        Self { key: None }
    }
}

impl KeySource for StaticKeySource {
    fn admin_key(&self) -> Option<String> {
        self.key.clone()
    }
}
