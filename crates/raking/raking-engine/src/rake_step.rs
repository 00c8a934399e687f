//! Rake step: scale one dimension's weights so its marginal matches the target.

use raking_core::{Dimension, RespondentRecord};

use crate::marginal::Marginal;

/// What a single rake step did.
#[derive(Debug, Clone, PartialEq)]
pub struct RakeStepOutcome {
    pub dimension: Dimension,
    /// Scaling factor applied to each category, in category order.
    pub factors: Vec<f64>,
    /// Categories with a positive target but no support. Their factor is 1
    /// and their target is unreachable.
    pub skipped: Vec<usize>,
}

/// Apply `f(c) = target(c) / current(c)` to every record in category `c`.
///
/// Categories with zero current share keep factor 1; the ones among them
/// with a positive target are reported in `skipped`.
pub fn rake_dimension(
    records: &[RespondentRecord],
    weights: &mut [f64],
    dimension: Dimension,
    targets: &[f64],
    current: &Marginal,
) -> RakeStepOutcome {
    debug_assert_eq!(records.len(), weights.len());
    debug_assert_eq!(current.dimension(), dimension);

    let mut skipped = Vec::new();
    let factors: Vec<f64> = targets
        .iter()
        .enumerate()
        .map(|(category, &target)| {
            let share = current.proportion(category);
            if share > 0.0 {
                target / share
            } else {
                if target > 0.0 {
                    skipped.push(category);
                }
                1.0
            }
        })
        .collect();

    for (record, weight) in records.iter().zip(weights.iter_mut()) {
        *weight *= factors[record.category_index(dimension)];
    }

    RakeStepOutcome {
        dimension,
        factors,
        skipped,
    }
}
