//! Weighted topline: candidate shares over a filtered record set.

use std::collections::BTreeMap;

use raking_core::{Category, Dimension, RespondentRecord, ValidationError};
use serde::{Deserialize, Serialize};

/// Per-dimension category allow-lists. A dimension without a list admits
/// every category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToplineFilter {
    allowed: [Option<Vec<bool>>; Dimension::COUNT],
}

impl ToplineFilter {
    /// A filter that admits every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict one dimension to `categories`. Calling it again for the same
    /// dimension widens the allow-list.
    pub fn allow<C: Category>(mut self, categories: &[C]) -> Self {
        let dimension = C::DIMENSION;
        let slot = self.allowed[dimension.index()]
            .get_or_insert_with(|| vec![false; dimension.category_count()]);
        for category in categories {
            slot[category.index()] = true;
        }
        self
    }

    /// Build a filter from wire labels: dimension name → allowed category labels.
    pub fn from_labels(labels: &BTreeMap<String, Vec<String>>) -> Result<Self, ValidationError> {
        let mut filter = Self::default();
        for (dim_name, categories) in labels {
            let dimension = Dimension::from_name(dim_name).ok_or_else(|| {
                ValidationError::UnknownDimension {
                    name: dim_name.clone(),
                }
            })?;
            let slot = filter.allowed[dimension.index()]
                .get_or_insert_with(|| vec![false; dimension.category_count()]);
            for label in categories {
                let index = dimension.category_index(label).ok_or_else(|| {
                    ValidationError::UnknownCategory {
                        dimension: dimension.name().to_string(),
                        category: label.clone(),
                    }
                })?;
                slot[index] = true;
            }
        }
        Ok(filter)
    }

    pub fn admits(&self, record: &RespondentRecord) -> bool {
        Dimension::ALL.iter().all(|&dimension| {
            self.allowed[dimension.index()]
                .as_ref()
                .map_or(true, |allowed| allowed[record.category_index(dimension)])
        })
    }
}

/// Weighted result for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateShare {
    pub candidate: String,
    pub respondents: usize,
    pub weight: f64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topline {
    pub respondents: usize,
    pub total_weight: f64,
    /// Ordered by candidate name.
    pub candidates: Vec<CandidateShare>,
}

impl Topline {
    pub fn share_of(&self, candidate: &str) -> Option<f64> {
        self.candidates
            .iter()
            .find(|c| c.candidate == candidate)
            .map(|c| c.share)
    }
}

/// Weighted candidate shares over the records `filter` admits.
pub fn weighted_topline(records: &[RespondentRecord], filter: &ToplineFilter) -> Topline {
    let mut by_candidate: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    let mut respondents = 0;
    let mut total_weight = 0.0;

    for record in records.iter().filter(|r| filter.admits(r)) {
        let entry = by_candidate.entry(record.candidate.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.weight;
        respondents += 1;
        total_weight += record.weight;
    }

    let candidates = by_candidate
        .into_iter()
        .map(|(candidate, (count, weight))| CandidateShare {
            candidate: candidate.to_string(),
            respondents: count,
            weight,
            share: if total_weight > 0.0 {
                weight / total_weight
            } else {
                0.0
            },
        })
        .collect();

    Topline {
        respondents,
        total_weight,
        candidates,
    }
}
