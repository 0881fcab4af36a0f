//! Error types for the anfrek-distribution crate.

/// Error type for all fallible operations in the anfrek-distribution crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DistributionError {
    /// Returned when a fit needs more valid values than were supplied.
    #[error("fitting requires at least {needed} valid values, got {got}")]
    TooFewPoints {
        /// Minimum number of values the fit is defined for.
        needed: usize,
        /// Number of values actually available.
        got: usize,
    },

    /// Returned when a log-based fit receives a value whose logarithm is
    /// undefined. Zeros are excluded upstream as missing data, so this
    /// reports genuine non-positive observations.
    #[error("log-based fit requires positive values, found {value}")]
    NonPositiveValue {
        /// The offending value.
        value: f64,
    },

    /// Returned when an underlying statrs distribution cannot be built.
    ///
    /// The `message` field is a `String` because statrs errors do not
    /// implement `Clone`.
    #[error("{distribution} construction failed: {message}")]
    Construction {
        /// Name of the distribution being constructed.
        distribution: String,
        /// Description of the failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_points_display() {
        let e = DistributionError::TooFewPoints { needed: 3, got: 2 };
        assert_eq!(
            e.to_string(),
            "fitting requires at least 3 valid values, got 2"
        );
    }

    #[test]
    fn non_positive_display() {
        let e = DistributionError::NonPositiveValue { value: -4.5 };
        assert_eq!(
            e.to_string(),
            "log-based fit requires positive values, found -4.5"
        );
    }

    #[test]
    fn construction_display() {
        let e = DistributionError::Construction {
            distribution: "gamma".to_string(),
            message: "shape must be positive".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "gamma construction failed: shape must be positive"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DistributionError>();
    }
}
