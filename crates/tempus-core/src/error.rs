//! Error types for tempus

use thiserror::Error;

/// Core tempus errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    // Construction errors
    #[error("nanoseconds component out of range: {0}")]
    InvalidNanoseconds(i64),

    // Literal parsing errors
    #[error("expected exactly one '.' separating seconds and fraction")]
    MalformedLiteral,

    #[error("fractional part too long: {len} digits, at most 9")]
    FractionTooLong { len: usize },

    #[error("non-numeric component: {0:?}")]
    NonNumeric(String),
}

/// Result type for tempus operations
pub type TimeResult<T> = Result<T, TimeError>;
