//! Respondent records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::dimension::{
    AgeBracket, Category, Dimension, Education, Gender, IncomeBracket, Race, Urbanity,
};
use crate::errors::ValidationError;

/// Opaque record identifier assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six categorical attributes of a respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Demographics {
    pub age: AgeBracket,
    pub gender: Gender,
    pub race: Race,
    pub income: IncomeBracket,
    pub urbanity: Urbanity,
    pub education: Education,
}

impl Demographics {
    /// Category index of this respondent on `dimension`.
    pub fn category_index(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Age => self.age.index(),
            Dimension::Gender => self.gender.index(),
            Dimension::Race => self.race.index(),
            Dimension::Income => self.income.index(),
            Dimension::Urbanity => self.urbanity.index(),
            Dimension::Education => self.education.index(),
        }
    }

    /// Category label of this respondent on `dimension`.
    pub fn category_label(&self, dimension: Dimension) -> &'static str {
        dimension.category_label(self.category_index(dimension))
    }
}

fn default_weight() -> f64 {
    1.0
}

/// One survey response.
///
/// Serialises flat: `{ id, poll, candidate, age, gender, race, income, urbanity, education, weight }`.
/// Only `weight` is mutated by raking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondentRecord {
    pub id: RecordId,
    pub poll: String,
    pub candidate: String,
    #[serde(flatten)]
    pub demographics: Demographics,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl RespondentRecord {
    pub fn new(
        id: u64,
        poll: impl Into<String>,
        candidate: impl Into<String>,
        demographics: Demographics,
    ) -> Self {
        Self {
            id: RecordId(id),
            poll: poll.into(),
            candidate: candidate.into(),
            demographics,
            weight: default_weight(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn category_index(&self, dimension: Dimension) -> usize {
        self.demographics.category_index(dimension)
    }

    /// Weights must be strictly positive and finite.
    pub fn validate_weight(&self) -> Result<(), ValidationError> {
        if self.weight.is_finite() && self.weight > 0.0 {
            Ok(())
        } else {
            Err(ValidationError::InvalidWeight {
                record_id: self.id.0,
                weight: self.weight,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demographics() -> Demographics {
        Demographics {
            age: AgeBracket::From30To44,
            gender: Gender::Female,
            race: Race::Hispanic,
            income: IncomeBracket::From50kTo100k,
            urbanity: Urbanity::Urban,
            education: Education::CollegeDegree,
        }
    }

    #[test]
    fn wire_shape_is_flat() {
        let record = RespondentRecord::new(7, "Ohio Senate Primary", "Candidate A", demographics());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["age"], "30-44");
        assert_eq!(value["income"], "50-100k");
        assert_eq!(value["education"], "college degree");
        assert_eq!(value["weight"], 1.0);
    }

    #[test]
    fn missing_weight_defaults_to_one() {
        let json = r#"{"id":1,"poll":"P","candidate":"Candidate B","age":"65+","gender":"Male",
            "race":"White","income":">100k","urbanity":"rural","education":"no college degree"}"#;
        let record: RespondentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.weight, 1.0);
        assert_eq!(record.category_index(Dimension::Income), 2);
    }

    #[test]
    fn unknown_category_label_is_rejected() {
        let json = r#"{"id":1,"poll":"P","candidate":"A","age":"17","gender":"Male",
            "race":"White","income":">100k","urbanity":"rural","education":"college degree"}"#;
        assert!(serde_json::from_str::<RespondentRecord>(json).is_err());
    }

    #[test]
    fn non_positive_weight_fails_validation() {
        let record = RespondentRecord::new(3, "P", "A", demographics()).with_weight(0.0);
        assert_eq!(
            record.validate_weight(),
            Err(ValidationError::InvalidWeight { record_id: 3, weight: 0.0 })
        );
        let record = record.with_weight(f64::INFINITY);
        assert!(record.validate_weight().is_err());
    }
}
