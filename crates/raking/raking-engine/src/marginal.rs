//! Marginal calculator: weighted share of total weight per category.

use raking_core::{Dimension, RespondentRecord};

/// Weighted marginal distribution of one dimension.
///
/// Every legal category of the dimension is covered; categories with no
/// records have a total of 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Marginal {
    dimension: Dimension,
    totals: Vec<f64>,
    total: f64,
}

impl Marginal {
    /// Compute the marginal of `dimension` using an external weight vector
    /// aligned with `records`.
    pub fn compute(records: &[RespondentRecord], weights: &[f64], dimension: Dimension) -> Self {
        debug_assert_eq!(records.len(), weights.len());
        let mut totals = vec![0.0; dimension.category_count()];
        for (record, &weight) in records.iter().zip(weights) {
            totals[record.category_index(dimension)] += weight;
        }
        let total = totals.iter().sum();
        Self {
            dimension,
            totals,
            total,
        }
    }

    /// Compute the marginal of `dimension` from the records' own weights.
    pub fn from_records(records: &[RespondentRecord], dimension: Dimension) -> Self {
        let weights: Vec<f64> = records.iter().map(|r| r.weight).collect();
        Self::compute(records, &weights, dimension)
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Total weight across all categories.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Weighted total (support) of one category.
    pub fn support(&self, category: usize) -> f64 {
        self.totals[category]
    }

    /// Share of total weight in `category`. 0 when the record set is empty.
    pub fn proportion(&self, category: usize) -> f64 {
        if self.total > 0.0 {
            self.totals[category] / self.total
        } else {
            0.0
        }
    }

    /// Shares of every category, in category order.
    pub fn proportions(&self) -> Vec<f64> {
        (0..self.totals.len()).map(|c| self.proportion(c)).collect()
    }
}
