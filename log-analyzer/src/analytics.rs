use std::collections::{HashMap, HashSet};

use chrono::TimeDelta;
use derive_getters::Getters;
use serde::Serialize;

use crate::{
    config::AnalyzerConfig,
    error::AnalyzerError,
    invariants::{Endpoint, Hostname},
    models::LogRecord,
    units::format_bytes,
};

/// Routes containing this are requests for the robots exclusion file.
const SPIDER_MARKER: &str = "robots.txt";
const HOURS_PER_DAY: i64 = 24;

/// Summary statistics over one log source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct AggregateReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    total_unique_hits: usize,
    total_unique_spiders: usize,
    num_days: i64,
    unique_hits_per_day: usize,
    bandwidth_last_24_hours: String,
    total_hits_per_route: HashMap<Endpoint, usize>,
}

/// Collects records in input order and counts route hits as they arrive.
///
/// Records are expected in chronological order, as a server writes them. The
/// day span is measured between the first and last record, so out-of-order
/// input skews it; this is logged but not rejected.
#[derive(Debug, Default)]
pub struct Analytics {
    records: Vec<LogRecord>,
    paths: HashMap<Endpoint, usize>,
}

impl Analytics {
    pub fn record(&mut self, record: LogRecord) {
        *self.paths.entry(record.path.clone()).or_default() += 1;
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summarize(self, config: &AnalyzerConfig) -> Result<AggregateReport, AnalyzerError> {
        let (Some(first), Some(last)) = (self.records.first(), self.records.last()) else {
            return Err(AnalyzerError::EmptyInput);
        };
        let num_days = (last.timestamp - first.timestamp).num_hours() / HOURS_PER_DAY;

        let mut hosts: HashSet<&Hostname> = HashSet::new();
        let mut spiders: HashSet<&Hostname> = HashSet::new();
        let mut latest = first.timestamp;
        let mut in_order = true;
        for record in &self.records {
            hosts.insert(&record.host);
            if record.path.as_str().contains(SPIDER_MARKER) {
                spiders.insert(&record.host);
            }
            if record.timestamp < latest {
                in_order = false;
            }
            latest = latest.max(record.timestamp);
        }
        if !in_order {
            tracing::warn!(
                first = %first.timestamp,
                last = %last.timestamp,
                "records are not in chronological order; day span may be inaccurate"
            );
        }

        let window = TimeDelta::hours(HOURS_PER_DAY);
        let bandwidth: u64 = self
            .records
            .iter()
            .filter(|r| latest - r.timestamp < window)
            .map(|r| r.bytes)
            .fold(0, u64::saturating_add);

        let total_unique_hits = hosts.len();
        let unique_hits_per_day = match usize::try_from(num_days) {
            Ok(days) if days > 0 => total_unique_hits / days,
            _ => 0,
        };
        tracing::debug!(
            records = self.records.len(),
            total_unique_hits,
            num_days,
            bandwidth,
            "summarized log records"
        );

        Ok(AggregateReport {
            name: config.name.clone(),
            total_unique_hits,
            total_unique_spiders: spiders.len(),
            num_days,
            unique_hits_per_day,
            bandwidth_last_24_hours: format_bytes(bandwidth),
            total_hits_per_route: self.paths,
        })
    }
}

/// Builds a report from records that were already parsed.
pub fn aggregate(
    records: impl IntoIterator<Item = LogRecord>,
    config: &AnalyzerConfig,
) -> Result<AggregateReport, AnalyzerError> {
    let mut analytics = Analytics::default();
    for record in records {
        analytics.record(record);
    }
    analytics.summarize(config)
}
