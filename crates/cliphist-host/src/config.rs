//! Plugin configuration.
//!
//! Settings are read once at activation, matching how the host surfaces them
//! to the plugin. Reconfiguring mid-session requires re-creating the plugin.

use crate::error::PluginError;
use cliphist_core::DEFAULT_CAPACITY;
use serde::Deserialize;

/// User-facing plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Maximum number of history entries to retain.
    ///
    /// Accepts the legacy `size` key as well.
    #[serde(alias = "size")]
    pub history_size: usize,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_CAPACITY,
        }
    }
}

impl PluginConfig {
    /// Parse settings from the host's JSON configuration blob.
    pub fn from_json(json: &str) -> Result<Self, PluginError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Effective history capacity: at least one entry is always retained.
    pub fn capacity(&self) -> usize {
        self.history_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_twelve() {
        assert_eq!(PluginConfig::default().capacity(), 12);
    }

    #[test]
    fn zero_size_is_clamped_to_one() {
        let config = PluginConfig { history_size: 0 };
        assert_eq!(config.capacity(), 1);
    }
}
