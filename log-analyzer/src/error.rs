use std::{num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Why a single log line was rejected. Never fatal to a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("not enough fields: expected {expected}, found {found}")]
    NotEnoughFields { expected: usize, found: usize },

    #[error("could not get time from {raw:?}: {source}")]
    Timestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("could not get status: {0}")]
    Status(#[source] ParseIntError),

    #[error("could not get size: {0}")]
    Size(#[source] ParseIntError),
}

/// Errors that stop an analysis run.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// No line of the input produced a record, so there is no first or last
    /// timestamp to measure from.
    #[error("no log records could be parsed")]
    EmptyInput,

    #[error("failed to read {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
