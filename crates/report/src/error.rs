//! Report assembly error types.

use anfrek_stats::StatsError;

/// Errors that can occur while assembling an analysis report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The sample failed validation before any distribution was fitted.
    #[error("invalid sample: {0}")]
    Input(#[from] StatsError),

    /// The significance level is outside the open unit interval.
    #[error("invalid significance level {alpha}, must be in (0, 1)")]
    InvalidAlpha { alpha: f64 },

    /// The return-period list has no valid entries left after parsing.
    #[error("return-period list contains no valid entries")]
    NoValidPeriods,

    /// Every sample value was excluded as missing data, leaving nothing
    /// to fit.
    #[error("sample contains no valid values")]
    EmptySample,

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_display() {
        let err = ReportError::Input(StatsError::TooFewPoints { needed: 2, got: 1 });
        let msg = format!("{}", err);
        assert!(msg.contains("invalid sample"));
        assert!(msg.contains("requires at least 2"));
    }

    #[test]
    fn test_invalid_alpha_display() {
        let err = ReportError::InvalidAlpha { alpha: 1.5 };
        let msg = format!("{}", err);
        assert!(msg.contains("1.5"));
        assert!(msg.contains("(0, 1)"));
    }

    #[test]
    fn test_no_valid_periods_display() {
        let msg = format!("{}", ReportError::NoValidPeriods);
        assert!(msg.contains("no valid entries"));
    }

    #[test]
    fn test_empty_sample_display() {
        let msg = format!("{}", ReportError::EmptySample);
        assert!(msg.contains("no valid values"));
    }

    #[test]
    fn test_serialization_display() {
        let err = ReportError::Serialization {
            reason: "bad value".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("serialization error"));
        assert!(msg.contains("bad value"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }
}
