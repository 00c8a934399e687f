//! # raking-engine
//!
//! Iterative proportional fitting over respondent records.
//!
//! ## Modules
//! - `marginal`: weighted category shares for one dimension
//! - `rake_step`: scale one dimension's weights toward its targets
//! - `convergence`: L1 error, stopping rule, error history
//! - `orchestrator`: `run_ipf`, pre-flight validation, pass loop
//! - `diagnostics`: report, per-pass records, advisories, weight summaries
//! - `topline`: weighted candidate shares over a filtered record set
//! - `store`: in-memory `RecordStore`
//! - `lock`: poll-scoped run exclusivity
//! - `service`: fetch → rake → persist under a poll guard

pub mod convergence;
pub mod diagnostics;
pub mod lock;
pub mod marginal;
pub mod orchestrator;
pub mod rake_step;
pub mod service;
pub mod store;
pub mod topline;

pub use convergence::{l1_error, ConvergenceStatus, ConvergenceTracker};
pub use diagnostics::{Advisory, Diagnostics, PassRecord, RakingReport, WeightSummary};
pub use lock::{PollGuard, PollLockRegistry};
pub use marginal::Marginal;
pub use orchestrator::{run_ipf, IpfRunner};
pub use rake_step::{rake_dimension, RakeStepOutcome};
pub use service::RakingService;
pub use store::InMemoryRecordStore;
pub use topline::{weighted_topline, CandidateShare, Topline, ToplineFilter};
