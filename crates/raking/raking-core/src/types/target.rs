//! Target specifications: desired marginal proportions for every dimension.
//!
//! A `TargetSpec` can only be obtained through validation, so every instance
//! satisfies: all six dimensions present, every proportion finite and in
//! `[0, 1]`, each dimension summing to 1.0 within the configured tolerance.

use std::collections::BTreeMap;

use serde::Serialize;

use super::dimension::{Category, Dimension};
use super::wire::TargetWeights;
use crate::errors::ValidationError;

/// Validated target proportions, indexed by dimension then category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSpec {
    shares: [Vec<f64>; Dimension::COUNT],
}

impl TargetSpec {
    pub fn builder() -> TargetSpecBuilder {
        TargetSpecBuilder::default()
    }

    /// Normalise the dynamic wire form into a typed specification.
    ///
    /// Unknown dimension or category names are rejected. Categories a
    /// dimension object omits get a target of 0.
    pub fn from_wire(weights: &TargetWeights, tolerance: f64) -> Result<Self, ValidationError> {
        let mut provided: [Option<Vec<f64>>; Dimension::COUNT] = Default::default();

        for (dim_name, categories) in weights {
            let dimension = Dimension::from_name(dim_name).ok_or_else(|| {
                ValidationError::UnknownDimension {
                    name: dim_name.clone(),
                }
            })?;
            let mut shares = vec![0.0; dimension.category_count()];
            for (label, &value) in categories {
                let index = dimension.category_index(label).ok_or_else(|| {
                    ValidationError::UnknownCategory {
                        dimension: dimension.name().to_string(),
                        category: label.clone(),
                    }
                })?;
                shares[index] = value;
            }
            provided[dimension.index()] = Some(shares);
        }

        Self::from_parts(provided, tolerance)
    }

    fn from_parts(
        provided: [Option<Vec<f64>>; Dimension::COUNT],
        tolerance: f64,
    ) -> Result<Self, ValidationError> {
        let mut shares: [Vec<f64>; Dimension::COUNT] = Default::default();
        for (dimension, slot) in Dimension::ALL.into_iter().zip(provided) {
            let Some(values) = slot else {
                return Err(ValidationError::MissingDimension {
                    dimension: dimension.name().to_string(),
                });
            };
            validate_dimension(dimension, &values, tolerance)?;
            shares[dimension.index()] = values;
        }
        Ok(Self { shares })
    }

    /// Target proportions for `dimension`, indexed by category.
    pub fn shares(&self, dimension: Dimension) -> &[f64] {
        &self.shares[dimension.index()]
    }

    /// Target proportion for a single category.
    pub fn share(&self, dimension: Dimension, category: usize) -> f64 {
        self.shares[dimension.index()][category]
    }

    /// Convert back to the wire form, listing every category.
    pub fn to_wire(&self) -> TargetWeights {
        Dimension::ALL
            .iter()
            .map(|&dimension| {
                let categories = dimension
                    .categories()
                    .iter()
                    .zip(self.shares(dimension))
                    .map(|(label, &share)| ((*label).to_string(), share))
                    .collect::<BTreeMap<_, _>>();
                (dimension.name().to_string(), categories)
            })
            .collect()
    }
}

fn validate_dimension(
    dimension: Dimension,
    values: &[f64],
    tolerance: f64,
) -> Result<(), ValidationError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::InvalidProportion {
                dimension: dimension.name().to_string(),
                category: dimension.category_label(index).to_string(),
                value,
            });
        }
    }
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() > tolerance {
        return Err(ValidationError::SumMismatch {
            dimension: dimension.name().to_string(),
            sum,
            tolerance,
        });
    }
    Ok(())
}

/// Typed construction of a [`TargetSpec`].
///
/// ```
/// use raking_core::{AgeBracket, Gender, TargetSpec};
/// let builder = TargetSpec::builder()
///     .share(Gender::Male, 0.5)
///     .share(Gender::Female, 0.5)
///     .share(AgeBracket::From18To29, 1.0);
/// // Still missing four dimensions.
/// assert!(builder.build(1e-5).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TargetSpecBuilder {
    provided: [Option<Vec<f64>>; Dimension::COUNT],
}

impl TargetSpecBuilder {
    /// Set the target proportion of one category. Other categories of the
    /// same dimension default to 0.
    pub fn share<C: Category>(mut self, category: C, value: f64) -> Self {
        let dimension = C::DIMENSION;
        let slot = self.provided[dimension.index()]
            .get_or_insert_with(|| vec![0.0; dimension.category_count()]);
        slot[category.index()] = value;
        self
    }

    /// Set a whole dimension at once from `(category, proportion)` pairs.
    pub fn dimension<C: Category>(self, pairs: &[(C, f64)]) -> Self {
        pairs
            .iter()
            .fold(self, |builder, &(category, value)| builder.share(category, value))
    }

    pub fn build(self, tolerance: f64) -> Result<TargetSpec, ValidationError> {
        TargetSpec::from_parts(self.provided, tolerance)
    }
}
