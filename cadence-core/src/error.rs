//! Error types for the period calculator.
//!
//! Classification and formatting are total and have no error type.

use thiserror::Error;

/// Result type alias for period computations.
pub type PeriodResult<T> = Result<T, PeriodError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// Cycle name outside daily/weekly/monthly/quarterly/yearly.
    #[error("unsupported period cycle: {0}")]
    UnsupportedCycle(String),

    /// Unparseable date, or a boundary outside the representable calendar range.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
