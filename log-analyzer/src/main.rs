use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use log_analyzer::{AnalyzerConfig, AnalyzerError, LogSink, analyze, routes::top_routes};
use num_format::{Locale, ToFormattedString};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Summarize a common log format access log", long_about = None)]
struct Args {
    /// Access log to read.
    file: PathBuf,

    /// Label for the report. Defaults to the file name.
    #[arg(long)]
    name: Option<String>,

    /// How many routes to list after the report.
    #[arg(long, default_value_t = 100)]
    top: usize,

    /// Used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log every line that fails to parse.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    let started = Instant::now();

    let file = File::open(&args.file).map_err(|source| AnalyzerError::SourceUnavailable {
        path: args.file.clone(),
        source,
    })?;
    let name = args.name.or_else(|| {
        args.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });
    let config = AnalyzerConfig { name };

    let mut sink = LogSink::new(args.verbose);
    let report = analyze(BufReader::new(file), &config, &mut sink)?;
    if sink.rejected() > 0 {
        tracing::warn!(rejected = sink.rejected(), "skipped lines that could not be parsed");
    }

    let mut out = io::stdout().lock();
    writeln!(out, "\n\n{}", serde_json::to_string_pretty(&report)?)?;
    writeln!(out, "finished in {:?}", started.elapsed())?;
    for (route, hits) in top_routes(report.total_hits_per_route(), args.top) {
        writeln!(out, "{route}, {}", hits.to_formatted_string(&Locale::en))?;
    }
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
