//! Stable error codes for the boundary layer.
//!
//! Callers (an HTTP layer, the CLI) map these to statuses without matching
//! on display strings.

/// Implemented by every error family in the workspace.
pub trait RakingErrorCode {
    /// Stable, machine-readable code for this error.
    fn error_code(&self) -> &'static str;
}

pub const VALIDATION_UNKNOWN_DIMENSION: &str = "VALIDATION_UNKNOWN_DIMENSION";
pub const VALIDATION_UNKNOWN_CATEGORY: &str = "VALIDATION_UNKNOWN_CATEGORY";
pub const VALIDATION_MISSING_DIMENSION: &str = "VALIDATION_MISSING_DIMENSION";
pub const VALIDATION_INVALID_PROPORTION: &str = "VALIDATION_INVALID_PROPORTION";
pub const VALIDATION_SUM_MISMATCH: &str = "VALIDATION_SUM_MISMATCH";
pub const VALIDATION_ZERO_TARGET_WITH_SUPPORT: &str = "VALIDATION_ZERO_TARGET_WITH_SUPPORT";
pub const VALIDATION_INVALID_WEIGHT: &str = "VALIDATION_INVALID_WEIGHT";
pub const VALIDATION_EMPTY_POLL: &str = "VALIDATION_EMPTY_POLL";
pub const VALIDATION_POLL_MISMATCH: &str = "VALIDATION_POLL_MISMATCH";

pub const STORE_POLL_NOT_FOUND: &str = "STORE_POLL_NOT_FOUND";
pub const STORE_RECORD_SET_MISMATCH: &str = "STORE_RECORD_SET_MISMATCH";
pub const STORE_BACKEND: &str = "STORE_BACKEND";

pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID_VALUE: &str = "CONFIG_INVALID_VALUE";
pub const CONFIG_IO: &str = "CONFIG_IO";

pub const RUN_IN_PROGRESS: &str = "RUN_IN_PROGRESS";
pub const SERIALIZATION: &str = "SERIALIZATION";
