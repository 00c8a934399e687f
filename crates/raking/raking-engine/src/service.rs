//! Raking service: fetch → rake → persist for one poll, under a poll guard.
//!
//! The guard spans the read and the write so no other run for the same poll
//! can interleave. Validation failures return before anything is persisted.

use raking_core::{
    IpfConfig, RakingResult, RecordStore, RunIpfRequest, RunIpfResponse, TargetSpec,
    ValidationError,
};
use tracing::{info, warn};

use crate::diagnostics::RakingReport;
use crate::lock::PollLockRegistry;
use crate::orchestrator::IpfRunner;

pub struct RakingService<S: RecordStore> {
    store: S,
    runner: IpfRunner,
    locks: PollLockRegistry,
}

impl<S: RecordStore> RakingService<S> {
    pub fn new(store: S, config: IpfConfig) -> RakingResult<Self> {
        Ok(Self {
            store,
            runner: IpfRunner::new(config)?,
            locks: PollLockRegistry::new(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn locks(&self) -> &PollLockRegistry {
        &self.locks
    }

    pub fn config(&self) -> &IpfConfig {
        self.runner.config()
    }

    /// Handle a wire request and build the wire response.
    pub fn run(&self, request: &RunIpfRequest) -> RakingResult<RunIpfResponse> {
        let report = self.run_report(request)?;
        Ok(report.to_response(&request.poll)?)
    }

    /// Handle a wire request and return the full report.
    pub fn run_report(&self, request: &RunIpfRequest) -> RakingResult<RakingReport> {
        if request.poll.trim().is_empty() {
            return Err(ValidationError::EmptyPoll.into());
        }
        let targets = TargetSpec::from_wire(&request.target_weights, self.config().sum_tolerance)?;
        self.rake_poll(&request.poll, &targets)
    }

    /// Rake every record of `poll` toward `targets` and persist the new weights.
    pub fn rake_poll(&self, poll: &str, targets: &TargetSpec) -> RakingResult<RakingReport> {
        let _guard = self.locks.try_acquire(poll).map_err(|e| {
            warn!(poll, "Raking run rejected, another run holds the poll");
            e
        })?;

        let records = self.store.fetch_records(poll)?;
        if let Some(stray) = records.iter().find(|r| r.poll != poll) {
            return Err(ValidationError::PollMismatch {
                record_id: stray.id.0,
                expected: poll.to_string(),
                found: stray.poll.clone(),
            }
            .into());
        }

        let report = self.runner.run(&records, targets)?;
        if !report.records.is_empty() {
            self.store.persist_weights(poll, &report.records)?;
        }
        info!(
            poll,
            respondents = report.records.len(),
            iterations = report.diagnostics.iterations,
            "Persisted raked weights"
        );
        Ok(report)
    }
}
