use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake common log format access logs for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value_t = 10_000)]
    lines: usize,

    /// Makes the output reproducible.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "2018-05-22T00:00:00-06:00")]
    start: DateTime<FixedOffset>,

    /// Fraction of requests for /robots.txt, between 0 and 1.
    #[arg(long, default_value_t = 0.01)]
    spider_rate: f64,

    /// Written to stdout when absent.
    #[arg(long)]
    output: Option<PathBuf>,
}
