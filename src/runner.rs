// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::dates::DEFAULT_MIN_YEAR;
use crate::errors::DateFixError;
use crate::normalizer::fix_rsv_dates;

/// Takes a ViPR-downloaded RSV FastA and formats the dates in the 4th header field
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The ViPR-downloaded RSV FastA
    #[arg(long = "in_fasta", value_name = "PATH")]
    pub in_fasta: PathBuf,

    /// The output FastA, with normalized dates
    #[arg(long = "out_fasta", value_name = "PATH")]
    pub out_fasta: PathBuf,

    /// Starting value for the earliest-year tracking
    #[arg(long = "min_year", value_name = "YEAR", default_value_t = DEFAULT_MIN_YEAR)]
    pub min_year: i32,
}

pub fn run_with(cli: &Cli) -> Result<(), DateFixError> {
    let report = fix_rsv_dates(&cli.in_fasta, &cli.out_fasta, cli.min_year)?;
    info!(
        "{} read, {} written, {} skipped (no date); earliest year {}",
        report.records_read,
        report.records_written(),
        report.records_skipped,
        report.min_year
    );
    Ok(())
}

pub fn run() -> Result<(), DateFixError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    run_with(&cli)
}
