//! Shared fixtures for raking-engine integration tests and benchmarks.

#![allow(dead_code)]

use raking_core::*;

pub const OHIO: &str = "Ohio Senate Primary";

/// Demographics with every dimension pinned except the ones a test varies.
pub fn base_demographics() -> Demographics {
    Demographics {
        age: AgeBracket::From18To29,
        gender: Gender::Male,
        race: Race::White,
        income: IncomeBracket::Under50k,
        urbanity: Urbanity::Urban,
        education: Education::CollegeDegree,
    }
}

/// Builder for a target spec whose dimensions default to matching
/// `base_demographics()` exactly.
pub fn pinned_targets() -> TargetSpecBuilder {
    TargetSpec::builder()
        .share(AgeBracket::From18To29, 1.0)
        .dimension(&[(Gender::Male, 0.5), (Gender::Female, 0.5)])
        .share(Race::White, 1.0)
        .share(IncomeBracket::Under50k, 1.0)
        .share(Urbanity::Urban, 1.0)
        .share(Education::CollegeDegree, 1.0)
}

/// The four-record poll: two Candidate A / Male, two Candidate B / Female.
/// Records 1 and 3 earn <50k, records 2 and 4 earn 50-100k.
pub fn four_records() -> Vec<RespondentRecord> {
    let male = |income| Demographics {
        gender: Gender::Male,
        income,
        ..base_demographics()
    };
    let female = |income| Demographics {
        gender: Gender::Female,
        income,
        ..base_demographics()
    };
    vec![
        RespondentRecord::new(1, OHIO, "Candidate A", male(IncomeBracket::Under50k)),
        RespondentRecord::new(2, OHIO, "Candidate A", male(IncomeBracket::From50kTo100k)),
        RespondentRecord::new(3, OHIO, "Candidate B", female(IncomeBracket::Under50k)),
        RespondentRecord::new(4, OHIO, "Candidate B", female(IncomeBracket::From50kTo100k)),
    ]
}

/// SplitMix64 step, used for deterministic synthetic polls.
pub fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn pick<C: Category>(state: &mut u64) -> C {
    C::ALL[(splitmix64(state) % C::ALL.len() as u64) as usize]
}

/// A deterministic poll of `n` respondents with uniformly drawn demographics.
pub fn synthetic_poll(poll: &str, n: u64, seed: u64) -> Vec<RespondentRecord> {
    let mut state = seed;
    (1..=n)
        .map(|id| {
            let demographics = Demographics {
                age: pick(&mut state),
                gender: pick(&mut state),
                race: pick(&mut state),
                income: pick(&mut state),
                urbanity: pick(&mut state),
                education: pick(&mut state),
            };
            let candidate = if splitmix64(&mut state) % 2 == 0 {
                "Candidate A"
            } else {
                "Candidate B"
            };
            RespondentRecord::new(id, poll, candidate, demographics)
        })
        .collect()
}

/// The front-end's default targets for the Ohio poll.
pub fn ohio_target_weights() -> TargetWeights {
    let dim = |pairs: &[(&str, f64)]| {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<std::collections::BTreeMap<_, _>>()
    };
    [
        ("age", dim(&[("18-29", 0.25), ("30-44", 0.25), ("45-64", 0.25), ("65+", 0.25)])),
        ("gender", dim(&[("Male", 0.48), ("Female", 0.52)])),
        ("race", dim(&[("White", 0.5), ("Black", 0.2), ("Hispanic", 0.2), ("Asian", 0.1)])),
        ("income", dim(&[("<50k", 0.33), ("50-100k", 0.33), (">100k", 0.34)])),
        ("urbanity", dim(&[("rural", 0.33), ("urban", 0.33), ("suburban", 0.34)])),
        ("education", dim(&[("college degree", 0.5), ("no college degree", 0.5)])),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

pub fn weighted_share(records: &[RespondentRecord], dimension: Dimension, category: usize) -> f64 {
    let total: f64 = records.iter().map(|r| r.weight).sum();
    let in_category: f64 = records
        .iter()
        .filter(|r| r.category_index(dimension) == category)
        .map(|r| r.weight)
        .sum();
    in_category / total
}
