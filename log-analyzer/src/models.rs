use chrono::{DateTime, FixedOffset};

use crate::invariants::{Endpoint, Hostname};

/// One successfully parsed access-log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub host: Hostname,
    pub timestamp: DateTime<FixedOffset>,
    pub method: String,
    pub path: Endpoint,
    pub protocol: String,
    pub status: u16,
    pub bytes: u64,
}
