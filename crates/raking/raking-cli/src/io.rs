//! JSON file helpers.

use std::fs;
use std::path::Path;

use anyhow::Context;
use raking_core::{RespondentRecord, TargetWeights};
use serde::Serialize;

pub fn read_records(path: &Path) -> anyhow::Result<Vec<RespondentRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse records in {}", path.display()))
}

pub fn read_targets(path: &Path) -> anyhow::Result<TargetWeights> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read targets from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse targets in {}", path.display()))
}

/// Pretty-print `value` to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
