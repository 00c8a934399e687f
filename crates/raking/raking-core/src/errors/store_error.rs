//! Errors from the external respondent record store.

use super::error_code::{self, RakingErrorCode};

/// Errors that can occur while fetching or persisting respondent records.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("poll not found: {poll}")]
    PollNotFound { poll: String },

    #[error("record set mismatch for poll {poll}: {reason}")]
    RecordSetMismatch { poll: String, reason: String },

    #[error("record store backend error: {message}")]
    Backend { message: String },
}

impl RakingErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PollNotFound { .. } => error_code::STORE_POLL_NOT_FOUND,
            Self::RecordSetMismatch { .. } => error_code::STORE_RECORD_SET_MISMATCH,
            Self::Backend { .. } => error_code::STORE_BACKEND,
        }
    }
}
