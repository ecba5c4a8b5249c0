/// Options applied when an [`AggregateReport`](crate::AggregateReport) is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Label copied into the report, usually the source file name.
    pub name: Option<String>,
}

impl AnalyzerConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
