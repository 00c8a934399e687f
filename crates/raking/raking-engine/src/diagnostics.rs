//! Raking diagnostics: numeric history plus structured advisories.

use raking_core::{Dimension, RespondentRecord, RunIpfResponse};
use serde::{Deserialize, Serialize};

use crate::convergence::ConvergenceStatus;

/// One completed pass over every dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassRecord {
    /// 1-based pass number.
    pub iteration: u32,
    /// L1 error after the pass.
    pub l1_error: f64,
    /// Largest absolute change of any single weight during the pass.
    pub max_weight_change: f64,
}

/// Distribution summary of a weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    pub count: usize,
    pub total: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Kish effective sample size: `(Σw)² / Σw²`.
    pub effective_sample_size: f64,
    /// `count / effective_sample_size`; 1.0 for uniform weights.
    pub design_effect: f64,
}

impl WeightSummary {
    pub fn from_weights(weights: &[f64]) -> Self {
        if weights.is_empty() {
            return Self {
                count: 0,
                total: 0.0,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                effective_sample_size: 0.0,
                design_effect: 0.0,
            };
        }

        let count = weights.len();
        let total: f64 = weights.iter().sum();
        let sum_sq: f64 = weights.iter().map(|w| w * w).sum();
        let min = weights.iter().copied().fold(f64::INFINITY, f64::min);
        let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let effective_sample_size = if sum_sq > 0.0 {
            total * total / sum_sq
        } else {
            0.0
        };
        let design_effect = if effective_sample_size > 0.0 {
            count as f64 / effective_sample_size
        } else {
            0.0
        };

        Self {
            count,
            total,
            min,
            max,
            mean: total / count as f64,
            effective_sample_size,
            design_effect,
        }
    }

    pub fn from_records(records: &[RespondentRecord]) -> Self {
        let weights: Vec<f64> = records.iter().map(|r| r.weight).collect();
        Self::from_weights(&weights)
    }
}

/// Non-fatal conditions surfaced alongside the numeric diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A category with a positive target has no respondents, so its target
    /// cannot be reached this run.
    ZeroSupport {
        dimension: Dimension,
        category: String,
        target: f64,
    },
    /// The pass cap was reached with the error still at or above epsilon.
    NonConvergence {
        iterations: u32,
        final_error: f64,
        epsilon: f64,
    },
}

/// Numeric outcome of one raking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Completed passes.
    pub iterations: u32,
    /// Final L1 error (last entry of `l1_errors`).
    pub final_change: f64,
    /// Baseline error followed by one entry per completed pass.
    pub l1_errors: Vec<f64>,
    pub status: ConvergenceStatus,
    pub passes: Vec<PassRecord>,
    pub initial_weights: WeightSummary,
    pub final_weights: WeightSummary,
}

impl Diagnostics {
    /// Diagnostics for a run over zero records.
    pub fn empty() -> Self {
        let summary = WeightSummary::from_weights(&[]);
        Self {
            iterations: 0,
            final_change: 0.0,
            l1_errors: vec![0.0],
            status: ConvergenceStatus::Converged,
            passes: Vec::new(),
            initial_weights: summary,
            final_weights: summary,
        }
    }

    pub fn converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }
}

/// Re-weighted records, diagnostics, and advisories from one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RakingReport {
    pub records: Vec<RespondentRecord>,
    pub diagnostics: Diagnostics,
    pub advisories: Vec<Advisory>,
}

impl RakingReport {
    /// Wire response for `poll`.
    pub fn to_response(&self, poll: &str) -> Result<RunIpfResponse, serde_json::Error> {
        let advisories = self
            .advisories
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RunIpfResponse {
            message: RunIpfResponse::completion_message(poll),
            iterations: self.diagnostics.iterations,
            final_change: self.diagnostics.final_change,
            l1_errors: self.diagnostics.l1_errors.clone(),
            advisories,
        })
    }

    pub fn zero_support(&self) -> impl Iterator<Item = &Advisory> {
        self.advisories
            .iter()
            .filter(|a| matches!(a, Advisory::ZeroSupport { .. }))
    }
}
