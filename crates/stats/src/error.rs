//! Error types for the anfrek-stats crate.

/// Error type for all fallible operations in the anfrek-stats crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    /// Returned when the sample contains no values at all.
    #[error("sample is empty")]
    EmptySample,

    /// Returned when a statistic needs more values than the sample holds.
    #[error("statistic requires at least {needed} values, got {got}")]
    TooFewPoints {
        /// Minimum number of values the statistic is defined for.
        needed: usize,
        /// Number of values actually available.
        got: usize,
    },

    /// Returned when year and value columns differ in length.
    #[error("length mismatch: {years_len} years vs {values_len} values")]
    LengthMismatch {
        /// Length of the year column.
        years_len: usize,
        /// Length of the value column.
        values_len: usize,
    },
}
