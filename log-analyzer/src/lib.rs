//! Traffic statistics for web-server access logs in common (or combined)
//! log format.

pub mod analytics;
pub mod config;
pub mod error;
pub mod ingest;
pub mod invariants;
pub mod models;
pub mod parser;
pub mod routes;
pub mod sink;
pub mod units;

pub use analytics::{AggregateReport, Analytics, aggregate};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, ParseError};
pub use ingest::analyze;
pub use models::LogRecord;
pub use parser::parse_line;
pub use sink::{FailureSink, LogSink, Rejected};
