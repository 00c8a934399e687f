//! `raking topline`: weighted candidate shares for one poll.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::bail;
use raking_engine::{weighted_topline, ToplineFilter};

use crate::io;

pub fn run(records_path: &Path, poll: &str, filters: &[String]) -> anyhow::Result<()> {
    let records: Vec<_> = io::read_records(records_path)?
        .into_iter()
        .filter(|r| r.poll == poll)
        .collect();
    let filter = ToplineFilter::from_labels(&parse_filters(filters)?)?;
    io::write_json(&weighted_topline(&records, &filter), None)
}

fn parse_filters(filters: &[String]) -> anyhow::Result<BTreeMap<String, Vec<String>>> {
    let mut labels: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for filter in filters {
        let Some((dimension, category)) = filter.split_once('=') else {
            bail!("Filter `{filter}` is not of the form DIMENSION=CATEGORY");
        };
        labels
            .entry(dimension.trim().to_string())
            .or_default()
            .push(category.trim().to_string());
    }
    Ok(labels)
}
