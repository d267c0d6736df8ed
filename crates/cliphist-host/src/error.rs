//! Host-layer errors.
//!
//! Command handlers never fail (missing preconditions are silent no-ops, per
//! the plugin's UX contract); configuration parsing is the one operation that
//! reports an error to the embedder.

use thiserror::Error;

/// Errors surfaced to the embedding host.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The host's configuration blob was not valid JSON for [`crate::PluginConfig`].
    #[error("invalid plugin configuration: {0}")]
    Config(#[from] serde_json::Error),
}
