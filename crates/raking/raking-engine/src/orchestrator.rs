//! IPF orchestration: validate, then rake every dimension per pass until the
//! convergence tracker stops.
//!
//! All state lives in the call. Concurrent runs over disjoint record sets
//! share nothing.

use std::time::Instant;

use raking_core::{
    ConfigError, Dimension, IpfConfig, RespondentRecord, TargetSpec, ValidationError,
};
use tracing::{debug, info, trace, warn};

use crate::convergence::{l1_error, ConvergenceStatus, ConvergenceTracker};
use crate::diagnostics::{Advisory, Diagnostics, RakingReport, WeightSummary};
use crate::marginal::Marginal;
use crate::rake_step::rake_dimension;

/// Runs IPF with a fixed, validated configuration.
#[derive(Debug, Clone, Default)]
pub struct IpfRunner {
    config: IpfConfig,
}

impl IpfRunner {
    pub fn new(config: IpfConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IpfConfig {
        &self.config
    }

    /// Rake `records` toward `targets`.
    ///
    /// Returns copies of the records with updated weights (same order, same
    /// identities, same non-weight fields). Fails only on validation, before
    /// any weight is computed.
    pub fn run(
        &self,
        records: &[RespondentRecord],
        targets: &TargetSpec,
    ) -> Result<RakingReport, ValidationError> {
        let start = Instant::now();

        if records.is_empty() {
            info!("No records to rake, returning empty diagnostics");
            return Ok(RakingReport {
                records: Vec::new(),
                diagnostics: Diagnostics::empty(),
                advisories: Vec::new(),
            });
        }

        for record in records {
            record.validate_weight()?;
        }
        let mut advisories = preflight(records, targets)?;
        for advisory in &advisories {
            if let Advisory::ZeroSupport {
                dimension,
                category,
                target,
            } = advisory
            {
                warn!(
                    dimension = %dimension,
                    category = %category,
                    target = *target,
                    "Category has no respondents, target unreachable this run"
                );
            }
        }

        let mut weights: Vec<f64> = records.iter().map(|r| r.weight).collect();
        let initial_total: f64 = weights.iter().sum();
        let initial_weights = WeightSummary::from_weights(&weights);

        let mut tracker = ConvergenceTracker::from_config(&self.config);
        let baseline = l1_error(records, &weights, targets);
        tracker.record_baseline(baseline);
        info!(
            respondents = records.len(),
            baseline_error = baseline,
            max_iterations = self.config.max_iterations,
            "Starting IPF run"
        );
        if !tracker.should_continue() {
            debug!(baseline_error = baseline, "Weights already match targets, no passes needed");
        }

        while tracker.should_continue() {
            let before = weights.clone();
            for dimension in Dimension::ALL {
                let current = Marginal::compute(records, &weights, dimension);
                let outcome = rake_dimension(
                    records,
                    &mut weights,
                    dimension,
                    targets.shares(dimension),
                    &current,
                );
                trace!(
                    dimension = %dimension,
                    factors = ?outcome.factors,
                    skipped = ?outcome.skipped,
                    "Rake step applied"
                );
            }
            if self.config.preserve_total_weight {
                rescale_to_total(&mut weights, initial_total);
            }

            let max_weight_change = before
                .iter()
                .zip(&weights)
                .map(|(old, new)| (new - old).abs())
                .fold(0.0, f64::max);
            let error = l1_error(records, &weights, targets);
            tracker.record_pass(error, max_weight_change);
            debug!(
                iteration = tracker.iterations(),
                l1_error = error,
                max_weight_change,
                "IPF pass complete"
            );
        }

        let status = tracker.status();
        let iterations = tracker.iterations();
        let epsilon = tracker.epsilon();
        let (l1_errors, passes) = tracker.into_parts();
        let final_change = l1_errors.last().copied().unwrap_or(baseline);

        if status == ConvergenceStatus::IterationCap {
            warn!(
                iterations,
                final_error = final_change,
                epsilon,
                "IPF hit the iteration cap before converging"
            );
            advisories.push(Advisory::NonConvergence {
                iterations,
                final_error: final_change,
                epsilon,
            });
        }

        let updated: Vec<RespondentRecord> = records
            .iter()
            .zip(&weights)
            .map(|(record, &weight)| RespondentRecord {
                weight,
                ..record.clone()
            })
            .collect();

        info!(
            respondents = updated.len(),
            iterations,
            final_error = final_change,
            converged = status == ConvergenceStatus::Converged,
            advisories = advisories.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "IPF run complete"
        );

        Ok(RakingReport {
            records: updated,
            diagnostics: Diagnostics {
                iterations,
                final_change,
                l1_errors,
                status,
                passes,
                initial_weights,
                final_weights: WeightSummary::from_weights(&weights),
            },
            advisories,
        })
    }
}

/// Rake with the default configuration.
pub fn run_ipf(
    records: &[RespondentRecord],
    targets: &TargetSpec,
) -> Result<RakingReport, ValidationError> {
    IpfRunner::default().run(records, targets)
}

/// Check every (dimension, category) pair against the record set.
///
/// A category with respondents and a target of 0 is rejected: its factor
/// would be 0. A category with a positive target and no respondents yields a
/// `ZeroSupport` advisory.
fn preflight(
    records: &[RespondentRecord],
    targets: &TargetSpec,
) -> Result<Vec<Advisory>, ValidationError> {
    let mut advisories = Vec::new();
    for dimension in Dimension::ALL {
        let mut counts = vec![0usize; dimension.category_count()];
        for record in records {
            counts[record.category_index(dimension)] += 1;
        }
        for (category, (&count, &target)) in counts.iter().zip(targets.shares(dimension)).enumerate()
        {
            let label = dimension.category_label(category);
            if count > 0 && target == 0.0 {
                return Err(ValidationError::ZeroTargetWithSupport {
                    dimension: dimension.name().to_string(),
                    category: label.to_string(),
                    respondents: count,
                });
            }
            if count == 0 && target > 0.0 {
                advisories.push(Advisory::ZeroSupport {
                    dimension,
                    category: label.to_string(),
                    target,
                });
            }
        }
    }
    Ok(advisories)
}

fn rescale_to_total(weights: &mut [f64], total: f64) {
    let current: f64 = weights.iter().sum();
    if current > 0.0 && current.is_finite() {
        let factor = total / current;
        for weight in weights.iter_mut() {
            *weight *= factor;
        }
    }
}
