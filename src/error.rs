/// Error taxonomy for log parsing and CSV export.
///
/// Every variant is an input-contract violation: the binaries report it and
/// terminate. Nothing in the library retries or skips a bad line.

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A line matched a known shape but its fields did not
    #[error("line {line}: wrong format ({reason}): {content}")]
    Format {
        line: usize,
        reason: String,
        content: String,
    },
    /// A benchmark identifier could not be decomposed
    #[error("benchmark name {name:?}: {reason}")]
    Identifier { name: String, reason: String },
    #[error("line {line}: unit mismatch, expected {expected:?} but found {found:?}")]
    UnitMismatch {
        line: usize,
        expected: String,
        found: String,
    },
    #[error("unknown time unit {unit:?} for operation {operation}")]
    UnknownUnit { unit: String, operation: String },
    #[error("line {line}: found time without benchmark name")]
    MissingBenchmark { line: usize },
    #[error("no results recorded for operation {operation}")]
    MissingOperation { operation: String },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn format(line: usize, reason: impl Into<String>, content: &str) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
            content: content.to_string(),
        }
    }

    pub fn identifier(name: &str, reason: impl Into<String>) -> Self {
        Self::Identifier {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
