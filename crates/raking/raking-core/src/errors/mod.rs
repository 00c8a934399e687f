//! Error types for every raking subsystem.
//! All families convert into [`RakingError`] via `From` impls.

pub mod config_error;
pub mod error_code;
pub mod raking_error;
pub mod store_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::RakingErrorCode;
pub use raking_error::{RakingError, RakingResult};
pub use store_error::StoreError;
pub use validation_error::ValidationError;
