pub mod ipf_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use ipf_config::IpfConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RakingConfig {
    pub ipf: IpfConfig,
    pub observability: ObservabilityConfig,
}

impl RakingConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    /// The result is validated before it is returned.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file on disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ipf.validate()
    }
}
