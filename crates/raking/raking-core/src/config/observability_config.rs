//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the tracing subscriber installed by binaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive, e.g. "info" or "raking_engine=debug".
    /// The `RAKING_LOG` environment variable takes precedence.
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
