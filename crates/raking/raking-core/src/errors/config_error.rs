//! Configuration loading errors.

use super::error_code::{self, RakingErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl RakingErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => error_code::CONFIG_PARSE,
            Self::InvalidValue { .. } => error_code::CONFIG_INVALID_VALUE,
            Self::Io { .. } => error_code::CONFIG_IO,
        }
    }
}
