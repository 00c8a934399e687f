//! Validation errors raised before any weight is touched.

use super::error_code::{self, RakingErrorCode};

/// A target specification or record set that cannot be raked.
///
/// Raised synchronously by normalisation and by the orchestrator's
/// pre-flight checks. No record is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown dimension: {name}")]
    UnknownDimension { name: String },

    #[error("unknown category '{category}' for dimension {dimension}")]
    UnknownCategory { dimension: String, category: String },

    #[error("target specification is missing dimension {dimension}")]
    MissingDimension { dimension: String },

    #[error("invalid proportion {value} for {dimension}:{category} (must be finite and in [0, 1])")]
    InvalidProportion {
        dimension: String,
        category: String,
        value: f64,
    },

    #[error("proportions for {dimension} sum to {sum}, expected 1.0 within {tolerance}")]
    SumMismatch {
        dimension: String,
        sum: f64,
        tolerance: f64,
    },

    #[error("category {dimension}:{category} has {respondents} respondents but a target of 0; raking would zero their weights")]
    ZeroTargetWithSupport {
        dimension: String,
        category: String,
        respondents: usize,
    },

    #[error("record {record_id} has invalid weight {weight} (must be finite and > 0)")]
    InvalidWeight { record_id: u64, weight: f64 },

    #[error("poll identifier must not be empty")]
    EmptyPoll,

    #[error("record {record_id} belongs to poll '{found}', expected '{expected}'")]
    PollMismatch {
        record_id: u64,
        expected: String,
        found: String,
    },
}

impl RakingErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownDimension { .. } => error_code::VALIDATION_UNKNOWN_DIMENSION,
            Self::UnknownCategory { .. } => error_code::VALIDATION_UNKNOWN_CATEGORY,
            Self::MissingDimension { .. } => error_code::VALIDATION_MISSING_DIMENSION,
            Self::InvalidProportion { .. } => error_code::VALIDATION_INVALID_PROPORTION,
            Self::SumMismatch { .. } => error_code::VALIDATION_SUM_MISMATCH,
            Self::ZeroTargetWithSupport { .. } => error_code::VALIDATION_ZERO_TARGET_WITH_SUPPORT,
            Self::InvalidWeight { .. } => error_code::VALIDATION_INVALID_WEIGHT,
            Self::EmptyPoll => error_code::VALIDATION_EMPTY_POLL,
            Self::PollMismatch { .. } => error_code::VALIDATION_POLL_MISMATCH,
        }
    }
}
