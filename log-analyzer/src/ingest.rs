use std::io::BufRead;

use crate::{
    analytics::{AggregateReport, Analytics},
    config::AnalyzerConfig,
    error::AnalyzerError,
    parser::parse_line,
    sink::FailureSink,
};

/// Reads newline-delimited log lines and summarizes the ones that parse.
///
/// Lines that fail to parse go to `sink` with their 1-based line number and
/// are left out of every statistic. Blank lines are skipped silently. Bytes
/// that are not valid UTF-8 are replaced rather than failing the read.
pub fn analyze<R: BufRead>(
    reader: R,
    config: &AnalyzerConfig,
    sink: &mut impl FailureSink,
) -> Result<AggregateReport, AnalyzerError> {
    let mut analytics = Analytics::default();
    for (index, chunk) in reader.split(b'\n').enumerate() {
        let mut chunk = chunk?;
        if chunk.last() == Some(&b'\r') {
            chunk.pop();
        }
        let line = String::from_utf8_lossy(&chunk);
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(record) => analytics.record(record),
            Err(error) => sink.reject(index + 1, &line, error),
        }
    }
    tracing::debug!(records = analytics.len(), "finished reading log");
    analytics.summarize(config)
}
