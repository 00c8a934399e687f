//! Convergence tracking: L1 error, stopping rule, error history.

use raking_core::{Dimension, IpfConfig, RespondentRecord, TargetSpec};
use serde::{Deserialize, Serialize};

use crate::diagnostics::PassRecord;
use crate::marginal::Marginal;

/// Sum over every (dimension, category) pair of `|current - target|`.
pub fn l1_error(records: &[RespondentRecord], weights: &[f64], targets: &TargetSpec) -> f64 {
    Dimension::ALL
        .iter()
        .map(|&dimension| {
            let marginal = Marginal::compute(records, weights, dimension);
            targets
                .shares(dimension)
                .iter()
                .enumerate()
                .map(|(category, &target)| (marginal.proportion(category) - target).abs())
                .sum::<f64>()
        })
        .sum()
}

/// Where the tracker stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceStatus {
    /// No error recorded yet, or below the cap and above epsilon.
    Running,
    /// Latest error is below epsilon.
    Converged,
    /// Pass cap reached with the error still at or above epsilon.
    IterationCap,
}

/// Records the error sequence and decides when raking stops.
///
/// The first entry of the sequence is the baseline error before any pass;
/// each completed pass appends one entry.
#[derive(Debug, Clone)]
pub struct ConvergenceTracker {
    epsilon: f64,
    max_iterations: u32,
    l1_errors: Vec<f64>,
    passes: Vec<PassRecord>,
}

impl ConvergenceTracker {
    pub fn new(epsilon: f64, max_iterations: u32) -> Self {
        Self {
            epsilon,
            max_iterations,
            l1_errors: Vec::new(),
            passes: Vec::new(),
        }
    }

    pub fn from_config(config: &IpfConfig) -> Self {
        Self::new(config.epsilon, config.max_iterations)
    }

    /// Record the pre-raking error. Must be called exactly once, first.
    pub fn record_baseline(&mut self, l1_error: f64) {
        debug_assert!(self.l1_errors.is_empty());
        self.l1_errors.push(l1_error);
    }

    /// Record a completed pass and return the resulting status.
    pub fn record_pass(&mut self, l1_error: f64, max_weight_change: f64) -> ConvergenceStatus {
        self.l1_errors.push(l1_error);
        self.passes.push(PassRecord {
            iteration: self.iterations(),
            l1_error,
            max_weight_change,
        });
        self.status()
    }

    /// Completed passes.
    pub fn iterations(&self) -> u32 {
        self.l1_errors.len().saturating_sub(1) as u32
    }

    pub fn latest_error(&self) -> Option<f64> {
        self.l1_errors.last().copied()
    }

    pub fn status(&self) -> ConvergenceStatus {
        match self.latest_error() {
            Some(error) if error < self.epsilon => ConvergenceStatus::Converged,
            Some(_) if self.iterations() >= self.max_iterations => ConvergenceStatus::IterationCap,
            _ => ConvergenceStatus::Running,
        }
    }

    pub fn should_continue(&self) -> bool {
        self.status() == ConvergenceStatus::Running
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn l1_errors(&self) -> &[f64] {
        &self.l1_errors
    }

    /// Consume the tracker, yielding the error sequence and per-pass records.
    pub fn into_parts(self) -> (Vec<f64>, Vec<PassRecord>) {
        (self.l1_errors, self.passes)
    }
}
