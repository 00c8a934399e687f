//! # raking-core
//!
//! Foundation crate for the survey raking engine.
//! Defines dimensions, respondent records, target specifications, wire types,
//! errors, config, tracing setup, and the record-store trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{IpfConfig, ObservabilityConfig, RakingConfig};
pub use errors::{
    ConfigError, RakingError, RakingErrorCode, RakingResult, StoreError, ValidationError,
};
pub use traits::RecordStore;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::dimension::{
    AgeBracket, Category, Dimension, Education, Gender, IncomeBracket, Race, Urbanity,
};
pub use types::record::{Demographics, RecordId, RespondentRecord};
pub use types::target::{TargetSpec, TargetSpecBuilder};
pub use types::wire::{RunIpfRequest, RunIpfResponse, TargetWeights};
