//! Shape coefficients (Cv, Cs, Ck) for distribution selection guidance.

use crate::error::StatsError;
use crate::moments;
use crate::sample::Sample;

/// Theoretical skewness of the Gumbel distribution.
pub const GUMBEL_CS: f64 = 1.1396;
/// Theoretical kurtosis of the Gumbel distribution.
pub const GUMBEL_CK: f64 = 5.4002;
/// Kurtosis of the normal distribution.
pub const NORMAL_CK: f64 = 3.0;

/// Variation, skewness, and kurtosis coefficients of a raw sample column.
///
/// Skewness and kurtosis carry the small-sample bias corrections
/// conventional in hydrology:
///
/// - `Cs = n / ((n-1)(n-2)) * sum((x - mean)^3) / std^3`
/// - `Ck = n^2 / ((n-1)(n-2)(n-3)) * sum((x - mean)^4) / std^4`
///
/// Textbook selection targets: Normal fits when Cs is near 0 and Ck near
/// [`NORMAL_CK`]; Log-Normal when Cs is near 3·Cv (positive); Gumbel when
/// Cs is near [`GUMBEL_CS`] and Ck near [`GUMBEL_CK`]; Log-Pearson III has
/// no fixed target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeCoefficients {
    /// Coefficient of variation, std / mean.
    pub cv: f64,
    /// Bias-corrected skewness coefficient.
    pub cs: f64,
    /// Bias-corrected kurtosis coefficient.
    pub ck: f64,
}

/// Computes Cv, Cs, and Ck over the raw value column.
///
/// With n = 2 or 3 the correction denominators vanish and the affected
/// coefficients come out non-finite; that is reported as-is rather than
/// as an error, so tiny samples still produce a report.
///
/// # Errors
///
/// Returns [`StatsError::TooFewPoints`] if the sample has fewer than 2
/// values.
pub fn shape_coefficients(sample: &Sample) -> Result<ShapeCoefficients, StatsError> {
    let values = sample.values();
    let n = values.len();
    if n < 2 {
        return Err(StatsError::TooFewPoints { needed: 2, got: n });
    }

    Ok(ShapeCoefficients {
        cv: moments::sd(values) / moments::mean(values),
        cs: moments::skewness(values),
        ck: moments::kurtosis(values),
    })
}
