//! Descriptive summary of a raw sample column.

use crate::error::StatsError;
use crate::moments;
use crate::sample::Sample;

/// Descriptive statistics over the raw value column (zeros retained).
///
/// `std` uses the N-1 denominator, `std0` the N denominator; percentiles
/// interpolate linearly between order statistics (R type-7).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Describe {
    /// Number of raw values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (ddof = 1).
    pub std: f64,
    /// Population standard deviation (ddof = 0).
    pub std0: f64,
    /// Smallest value.
    pub min: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median.
    pub p50: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Largest value.
    pub max: f64,
}

/// Computes the descriptive summary of a sample's raw column.
///
/// # Errors
///
/// Returns [`StatsError::TooFewPoints`] if the sample has fewer than 2
/// values (the standard deviation is undefined below that).
pub fn describe(sample: &Sample) -> Result<Describe, StatsError> {
    let values = sample.values();
    if values.len() < 2 {
        return Err(StatsError::TooFewPoints {
            needed: 2,
            got: values.len(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(Describe {
        count: values.len(),
        mean: moments::mean(values),
        std: moments::sd(values),
        std0: moments::sd_pop(values),
        min: sorted[0],
        p25: moments::quantile_type7(&sorted, 0.25),
        p50: moments::quantile_type7(&sorted, 0.50),
        p75: moments::quantile_type7(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}
