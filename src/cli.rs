//! Command-line interface definitions and argument parsing

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Synthetic retail sales analysis: generate, aggregate, chart and report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for the random source driving data generation
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// First transaction date (YYYY-MM-DD)
    #[arg(long, default_value = "2023-01-01")]
    pub start: String,

    /// Last transaction date (YYYY-MM-DD)
    #[arg(long, default_value = "2023-12-31")]
    pub end: String,

    /// Directory the chart images are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse the start and end dates
    /// Expected format: "YYYY-MM-DD"
    ///
    /// Ordering is checked by `GeneratorConfig::new`, not here.
    pub fn date_range(&self) -> crate::Result<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::parse_from_str(self.start.trim(), "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid start date: {}", self.start))?;
        let end = NaiveDate::parse_from_str(self.end.trim(), "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid end date: {}", self.end))?;

        Ok((start, end))
    }
}
