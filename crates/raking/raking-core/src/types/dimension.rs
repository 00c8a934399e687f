//! The six raking dimensions and their category sets.
//!
//! Dimensions and categories are static configuration. Each dimension has a
//! typed category enum that serialises to the wire label, so records and
//! target specifications carry compile-time-checked values instead of
//! free-form strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One categorical axis of classification.
///
/// The declaration order is the fixed raking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Age,
    Gender,
    Race,
    Income,
    Urbanity,
    Education,
}

impl Dimension {
    /// Number of dimensions.
    pub const COUNT: usize = 6;

    /// All dimensions in raking order.
    pub const ALL: [Dimension; Self::COUNT] = [
        Dimension::Age,
        Dimension::Gender,
        Dimension::Race,
        Dimension::Income,
        Dimension::Urbanity,
        Dimension::Education,
    ];

    /// Position of this dimension in [`Dimension::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name of the dimension (`"age"`, `"gender"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Race => "race",
            Self::Income => "income",
            Self::Urbanity => "urbanity",
            Self::Education => "education",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    /// Ordered category labels for this dimension.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Self::Age => AgeBracket::LABELS,
            Self::Gender => Gender::LABELS,
            Self::Race => Race::LABELS,
            Self::Income => IncomeBracket::LABELS,
            Self::Urbanity => Urbanity::LABELS,
            Self::Education => Education::LABELS,
        }
    }

    pub fn category_count(self) -> usize {
        self.categories().len()
    }

    /// Index of a category label within this dimension, if legal.
    pub fn category_index(self, label: &str) -> Option<usize> {
        self.categories().iter().position(|c| *c == label)
    }

    /// Label of the category at `index`. Panics on an out-of-range index,
    /// which can only come from a bug in index bookkeeping.
    pub fn category_label(self, index: usize) -> &'static str {
        self.categories()[index]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed category value belonging to exactly one [`Dimension`].
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// The dimension this category type classifies.
    const DIMENSION: Dimension;
    /// Wire labels, indexed by [`Category::index`].
    const LABELS: &'static [&'static str];
    /// Every variant, in label order.
    const ALL: &'static [Self];

    fn index(self) -> usize;

    fn label(self) -> &'static str {
        Self::LABELS[self.index()]
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| Self::ALL[i])
    }
}

macro_rules! categories {
    (
        $(#[$meta:meta])*
        $name:ident => $dim:expr, {
            $($variant:ident = $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Category for $name {
            const DIMENSION: Dimension = $dim;
            const LABELS: &'static [&'static str] = &[$($label),+];
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

categories! {
    /// Age bracket of the respondent.
    AgeBracket => Dimension::Age, {
        From18To29 = "18-29",
        From30To44 = "30-44",
        From45To64 = "45-64",
        Over65 = "65+",
    }
}

categories! {
    Gender => Dimension::Gender, {
        Male = "Male",
        Female = "Female",
    }
}

categories! {
    Race => Dimension::Race, {
        White = "White",
        Black = "Black",
        Hispanic = "Hispanic",
        Asian = "Asian",
    }
}

categories! {
    /// Household income bracket.
    IncomeBracket => Dimension::Income, {
        Under50k = "<50k",
        From50kTo100k = "50-100k",
        Over100k = ">100k",
    }
}

categories! {
    Urbanity => Dimension::Urbanity, {
        Rural = "rural",
        Urban = "urban",
        Suburban = "suburban",
    }
}

categories! {
    Education => Dimension::Education, {
        CollegeDegree = "college degree",
        NoCollegeDegree = "no college degree",
    }
}
