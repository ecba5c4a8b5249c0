use crate::error::ParseError;

/// Receives the lines that could not be parsed.
pub trait FailureSink {
    fn reject(&mut self, line_number: usize, line: &str, error: ParseError);
}

/// Logs each rejected line and keeps a count.
#[derive(Debug, Default)]
pub struct LogSink {
    verbose: bool,
    rejected: usize,
}

impl LogSink {
    /// When `verbose`, rejections are logged at warn level instead of debug.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            rejected: 0,
        }
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl FailureSink for LogSink {
    fn reject(&mut self, line_number: usize, line: &str, error: ParseError) {
        self.rejected += 1;
        if self.verbose {
            tracing::warn!(line_number, line, %error, "skipping malformed line");
        } else {
            tracing::debug!(line_number, line, %error, "skipping malformed line");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub line_number: usize,
    pub error: ParseError,
}

impl FailureSink for Vec<Rejected> {
    fn reject(&mut self, line_number: usize, _line: &str, error: ParseError) {
        self.push(Rejected { line_number, error });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_counts() {
        let mut sink = LogSink::new(true);
        let error = ParseError::NotEnoughFields {
            expected: 8,
            found: 1,
        };
        sink.reject(3, "garbage", error.clone());
        sink.reject(9, "more garbage", error);
        assert_eq!(sink.rejected(), 2);
    }
}
