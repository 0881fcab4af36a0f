//! Error types for the anfrek-gof crate.

/// Error type for all fallible operations in the anfrek-gof crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GofError {
    /// Returned when the sample holds no valid values to test.
    #[error("sample contains no valid values")]
    EmptySample,

    /// Returned when the significance level is outside (0, 1).
    #[error("significance level must be in (0, 1), got {alpha}")]
    InvalidAlpha {
        /// The offending significance level.
        alpha: f64,
    },

    /// Returned when an underlying statrs distribution cannot be built
    /// while computing a critical value.
    #[error("critical value computation failed: {message}")]
    CriticalValue {
        /// Description of the failure.
        message: String,
    },
}
