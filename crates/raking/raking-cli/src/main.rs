//! raking: rake a poll's respondent weights toward demographic targets.
//!
//! Usage:
//!   raking run --records records.json --targets targets.json [--poll NAME]
//!   raking topline --records records.json --poll NAME [--filter gender=Female]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod io;
mod run;
mod topline;

#[derive(Parser)]
#[command(name = "raking")]
#[command(about = "Iterative proportional fitting of survey respondent weights")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rake one poll's weights and print the run response
    Run {
        /// JSON array of respondent records
        #[arg(short, long)]
        records: PathBuf,

        /// JSON object of dimension → category → target proportion
        #[arg(short, long)]
        targets: PathBuf,

        /// Poll to rake (default: the poll of the first record)
        #[arg(short, long)]
        poll: Option<String>,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the response here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the re-weighted records of the poll here
        #[arg(long)]
        write_records: Option<PathBuf>,

        /// Debug-level logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print weighted candidate shares for a poll
    Topline {
        /// JSON array of respondent records
        #[arg(short, long)]
        records: PathBuf,

        /// Poll to summarise
        #[arg(short, long)]
        poll: String,

        /// Restrict a dimension, e.g. `gender=Female`. Repeatable.
        #[arg(short, long = "filter", value_name = "DIMENSION=CATEGORY")]
        filters: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            records,
            targets,
            poll,
            config,
            output,
            write_records,
            verbose,
        } => run::run(run::RunArgs {
            records,
            targets,
            poll,
            config,
            output,
            write_records,
            verbose,
        })?,
        Commands::Topline {
            records,
            poll,
            filters,
        } => topline::run(&records, &poll, &filters)?,
    }

    Ok(())
}
