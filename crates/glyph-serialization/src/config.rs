//! Serialization settings

use serde::{Deserialize, Serialize};

/// Environment variable switching ID generation to sequential ids
pub const SIMPLE_IDS_ENV: &str = "GLYPH_SIMPLE_IDS";

/// Settings for the serialization helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SerializationSettings {
    /// Generate short sequential ids instead of UUIDs
    pub simple_ids: bool,
}

impl SerializationSettings {
    /// Create default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With simple ids
    #[inline]
    #[must_use]
    pub fn with_simple_ids(mut self, simple_ids: bool) -> Self {
        self.simple_ids = simple_ids;
        self
    }

    /// Read settings from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let simple_ids = lookup(SIMPLE_IDS_ENV).is_some_and(|v| is_truthy(&v));
        tracing::debug!(simple_ids, "serialization settings loaded");
        Self { simple_ids }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
