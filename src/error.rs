use chrono::NaiveDate;
use std::fmt;

/// Errors raised by the model stages. Both kinds indicate bad input data for
/// a single record and are not retryable.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidInput { field: &'static str, reason: String },
    DivisionByZero { context: &'static str },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidInput { field, reason } => {
                write!(f, "invalid input for `{}`: {}", field, reason)
            }
            ModelError::DivisionByZero { context } => {
                write!(f, "division by zero while computing {}", context)
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// A per-record failure inside a series run. Carries the record's position
/// (and calendar date when the observation is tagged with one) so one bad day
/// can be reported without discarding the rest of the series.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordError {
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub source: ModelError,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "record {} ({}): {}", self.index, date, self.source),
            None => write!(f, "record {}: {}", self.index, self.source),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
