use std::error::Error;
use std::fmt;

use crate::platform::PlatformId;

/// Every failure the portfolio can report.
///
/// Nothing here is reachable from user input in a well-formed build: chart and
/// catalog variants guard the literal tables, the rest guard view state and
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    EmptyChart { chart: String },
    TooFewKeys { chart: String, found: usize },
    HeterogeneousRecord { chart: String, row: usize },
    NonNumericSeries { chart: String, row: usize, key: String },
    TabOutOfRange { index: usize, len: usize },
    CategoryFilterUnsupported,
    UnknownPlatform(String),
    MissingPlatform(PlatformId),
    EmptyPlatform(PlatformId),
    InvalidConfig(String),
    Export(String),
    Scheduler(String),
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DashboardError::EmptyChart { ref chart } => {
                write!(f, "chart '{}' has no records", chart)
            }
            DashboardError::TooFewKeys { ref chart, found } => write!(
                f,
                "chart '{}' needs at least 2 keys per record, found {}",
                chart, found
            ),
            DashboardError::HeterogeneousRecord { ref chart, row } => write!(
                f,
                "chart '{}' record {} does not share the key set of record 0",
                chart, row
            ),
            DashboardError::NonNumericSeries { ref chart, row, ref key } => write!(
                f,
                "chart '{}' record {} has a non-numeric value for series '{}'",
                chart, row, key
            ),
            DashboardError::TabOutOfRange { index, len } => {
                write!(f, "tab {} is out of range for {} tabs", index, len)
            }
            DashboardError::CategoryFilterUnsupported => {
                write!(f, "this view has no category filter")
            }
            DashboardError::UnknownPlatform(ref path) => write!(f, "no platform at '{}'", path),
            DashboardError::MissingPlatform(id) => {
                write!(f, "catalog has no entry for {}", id.slug())
            }
            DashboardError::EmptyPlatform(id) => write!(f, "platform {} has no tabs", id.slug()),
            DashboardError::InvalidConfig(ref msg) => write!(f, "invalid configuration: {}", msg),
            DashboardError::Export(ref msg) => write!(f, "chart export failed: {}", msg),
            DashboardError::Scheduler(ref msg) => write!(f, "interval scheduler failed: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_fault() {
        assert_eq!(
            DashboardError::EmptyPlatform(PlatformId::AiModelHub).to_string(),
            "platform ai-model-hub has no tabs"
        );
        assert_eq!(
            DashboardError::Export("key must be a string".to_string()).to_string(),
            "chart export failed: key must be a string"
        );
        assert_eq!(
            DashboardError::TabOutOfRange { index: 6, len: 6 }.to_string(),
            "tab 6 is out of range for 6 tabs"
        );
    }
}
