use super::error_code::{self, RakingErrorCode};
use super::{ConfigError, StoreError, ValidationError};

/// Top-level error type for the raking workspace.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum RakingError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("a raking run is already in progress for poll {poll}")]
    RunInProgress { poll: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RakingErrorCode for RakingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::RunInProgress { .. } => error_code::RUN_IN_PROGRESS,
            Self::Serialization(_) => error_code::SERIALIZATION,
        }
    }
}

/// Convenience type alias.
pub type RakingResult<T> = Result<T, RakingError>;
