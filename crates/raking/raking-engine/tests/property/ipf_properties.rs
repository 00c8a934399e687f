//! Property tests for the IPF engine: positivity, identity, error history
//! shape, and marginal fit on convergence.

use proptest::prelude::*;

use raking_core::*;
use raking_engine::{run_ipf, ConvergenceStatus, IpfRunner, Marginal};

const POLL: &str = "Property Poll";

type Cell = (usize, usize, usize, usize, usize, usize);

fn demographics(cell: Cell) -> Demographics {
    Demographics {
        age: AgeBracket::ALL[cell.0],
        gender: Gender::ALL[cell.1],
        race: Race::ALL[cell.2],
        income: IncomeBracket::ALL[cell.3],
        urbanity: Urbanity::ALL[cell.4],
        education: Education::ALL[cell.5],
    }
}

// Four leading records cover every category, so no positive target is
// left without support.
fn records_from(cells: &[Cell]) -> Vec<RespondentRecord> {
    let coverage = (0..4).map(|i| (i % 4, i % 2, i % 4, i % 3, i % 3, i % 2));
    coverage
        .chain(cells.iter().copied())
        .enumerate()
        .map(|(i, cell)| {
            let candidate = if i % 3 == 0 { "Candidate A" } else { "Candidate B" };
            RespondentRecord::new(i as u64 + 1, POLL, candidate, demographics(cell))
        })
        .collect()
}

// One raw weight per category across all dimensions, normalised per dimension.
fn targets_from(raw: &[f64]) -> TargetSpec {
    let mut wire = TargetWeights::new();
    let mut offset = 0;
    for dimension in Dimension::ALL {
        let n = dimension.category_count();
        let slice = &raw[offset..offset + n];
        let sum: f64 = slice.iter().sum();
        wire.insert(
            dimension.name().to_string(),
            dimension
                .categories()
                .iter()
                .zip(slice)
                .map(|(label, w)| (label.to_string(), w / sum))
                .collect(),
        );
        offset += n;
    }
    TargetSpec::from_wire(&wire, 1e-5).unwrap()
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    (0..4usize, 0..2usize, 0..4usize, 0..3usize, 0..3usize, 0..2usize)
}

fn category_total() -> usize {
    Dimension::ALL.iter().map(|d| d.category_count()).sum()
}

proptest! {
    #[test]
    fn prop_weights_stay_positive_and_finite(
        cells in prop::collection::vec(cell_strategy(), 0..60),
        raw in prop::collection::vec(0.05f64..1.0, category_total()),
    ) {
        let records = records_from(&cells);
        let report = run_ipf(&records, &targets_from(&raw)).unwrap();
        for record in &report.records {
            prop_assert!(record.weight.is_finite());
            prop_assert!(record.weight > 0.0);
        }
    }
}

proptest! {
    #[test]
    fn prop_identity_and_count_preserved(
        cells in prop::collection::vec(cell_strategy(), 0..60),
        raw in prop::collection::vec(0.05f64..1.0, category_total()),
    ) {
        let records = records_from(&cells);
        let report = run_ipf(&records, &targets_from(&raw)).unwrap();
        prop_assert_eq!(report.records.len(), records.len());
        for (before, after) in records.iter().zip(&report.records) {
            prop_assert_eq!(before.id, after.id);
            prop_assert_eq!(&before.poll, &after.poll);
            prop_assert_eq!(&before.candidate, &after.candidate);
            prop_assert_eq!(before.demographics, after.demographics);
        }
    }
}

proptest! {
    #[test]
    fn prop_error_history_has_baseline_plus_one_per_pass(
        cells in prop::collection::vec(cell_strategy(), 0..60),
        raw in prop::collection::vec(0.05f64..1.0, category_total()),
        max_iterations in 1u32..8,
    ) {
        let records = records_from(&cells);
        let runner = IpfRunner::new(IpfConfig { max_iterations, ..IpfConfig::default() }).unwrap();
        let report = runner.run(&records, &targets_from(&raw)).unwrap();
        let d = &report.diagnostics;
        prop_assert_eq!(d.l1_errors.len(), d.iterations as usize + 1);
        prop_assert!(d.iterations <= max_iterations);
        prop_assert_eq!(d.final_change, *d.l1_errors.last().unwrap());
    }
}

proptest! {
    #[test]
    fn prop_converged_runs_fit_every_marginal(
        cells in prop::collection::vec(cell_strategy(), 0..60),
        raw in prop::collection::vec(0.05f64..1.0, category_total()),
    ) {
        let records = records_from(&cells);
        let targets = targets_from(&raw);
        let report = run_ipf(&records, &targets).unwrap();
        let d = &report.diagnostics;
        match d.status {
            ConvergenceStatus::Converged => {
                for dimension in Dimension::ALL {
                    let marginal = Marginal::from_records(&report.records, dimension);
                    for (c, &target) in targets.shares(dimension).iter().enumerate() {
                        prop_assert!((marginal.proportion(c) - target).abs() < 2e-6);
                    }
                }
            }
            ConvergenceStatus::IterationCap => prop_assert_eq!(d.iterations, 50),
            ConvergenceStatus::Running => prop_assert!(false, "run ended while still running"),
        }
    }
}

proptest! {
    #[test]
    fn prop_total_weight_preserved(
        cells in prop::collection::vec(cell_strategy(), 0..60),
        raw in prop::collection::vec(0.05f64..1.0, category_total()),
    ) {
        let records = records_from(&cells);
        let report = run_ipf(&records, &targets_from(&raw)).unwrap();
        let total: f64 = report.records.iter().map(|r| r.weight).sum();
        prop_assert!((total - records.len() as f64).abs() < 1e-6 * records.len() as f64);
    }
}
