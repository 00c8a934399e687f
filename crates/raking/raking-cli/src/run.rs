//! `raking run`: load records, rake one poll, emit the response.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use raking_core::tracing::init_tracing;
use raking_core::{RakingConfig, RecordStore, RunIpfRequest};
use raking_engine::{InMemoryRecordStore, RakingService};
use tracing::info;

use crate::io;

pub struct RunArgs {
    pub records: PathBuf,
    pub targets: PathBuf,
    pub poll: Option<String>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub write_records: Option<PathBuf>,
    pub verbose: bool,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => RakingConfig::from_file(path)?,
        None => RakingConfig::default(),
    };
    if args.verbose {
        config.observability.log_level = "debug".to_string();
    }
    init_tracing(&config.observability);

    let records = io::read_records(&args.records)?;
    let target_weights = io::read_targets(&args.targets)?;
    let poll = match args.poll {
        Some(poll) => poll,
        None => records
            .first()
            .map(|r| r.poll.clone())
            .context("No --poll given and the records file is empty")?,
    };
    info!(
        poll = %poll,
        records = records.len(),
        path = %args.records.display(),
        "Loaded respondent records"
    );

    let store = Arc::new(InMemoryRecordStore::from_records(records));
    let service = RakingService::new(Arc::clone(&store), config.ipf)?;
    let response = service.run(&RunIpfRequest {
        poll: poll.clone(),
        target_weights,
    })?;

    io::write_json(&response, args.output.as_deref())?;
    if let Some(path) = &args.write_records {
        let raked = store.fetch_records(&poll)?;
        io::write_json(&raked, Some(path))?;
        info!(poll = %poll, path = %path.display(), "Wrote re-weighted records");
    }
    Ok(())
}
