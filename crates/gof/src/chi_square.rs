//! Chi-square test with equiprobable classes from a fitted distribution.

use crate::critical::{chi_square_critical_value, ChiSquareCriticalSource};
use crate::error::GofError;
use anfrek_distribution::FittedDistribution;

/// One class of the chi-square partition.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareClass {
    /// Lower edge of the class. The first class includes this edge.
    pub lower: f64,
    /// Upper edge of the class, inclusive.
    pub upper: f64,
    /// Observed count of sample values falling in the class.
    pub observed: usize,
    /// Expected count n / k under the fitted distribution.
    pub expected: f64,
}

/// Full outcome of a chi-square test.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareReport {
    /// The equiprobable classes with observed and expected counts.
    pub classes: Vec<ChiSquareClass>,
    /// Test statistic sum of (fe - ft)^2 / ft.
    pub statistic: f64,
    /// Critical value at the requested significance level.
    pub critical: f64,
    /// Degrees of freedom k - 3, floored at 1.
    pub degrees_of_freedom: usize,
    /// Number of classes k.
    pub n_classes: usize,
    /// Significance level the test was run at.
    pub alpha: f64,
    /// Whether the statistic is at or below the critical value.
    pub accepted: bool,
}

/// Sturges-style class count k = round(1 + 1.33 ln n), floored at 2.
fn class_count(n: usize) -> usize {
    let k = (1.0 + 1.33 * (n as f64).ln()).round() as usize;
    k.max(2)
}

/// Runs the chi-square test of `values` against `fit`.
///
/// Classes are equiprobable under the fit: the k - 1 interior boundaries
/// are the fitted quantiles at non-exceedance j / k, and the outer edges
/// are the sample minimum and maximum. The expected count per class is
/// n / k. Degrees of freedom are k - 3 (k - 1, minus 2 fitted
/// parameters), floored at 1.
///
/// Interior boundaries falling outside the sample range are clamped to
/// min/max, so a poor fit yields empty outer classes and a finite
/// rejection rather than a broken partition. Only non-finite or
/// out-of-order boundaries (a fit with undefined parameters) degenerate
/// the partition; then the statistic is reported as infinite with no
/// classes and the hypothesis is rejected.
///
/// # Errors
///
/// Returns [`GofError::EmptySample`] when `values` is empty and
/// [`GofError::InvalidAlpha`] when `alpha` is outside (0, 1).
pub fn chi_square(
    values: &[f64],
    fit: &FittedDistribution,
    alpha: f64,
    source: ChiSquareCriticalSource,
) -> Result<ChiSquareReport, GofError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(GofError::InvalidAlpha { alpha });
    }
    if values.is_empty() {
        return Err(GofError::EmptySample);
    }
    let n = values.len();
    if n < 5 {
        tracing::warn!(n, "chi-square test on a very small sample");
    }

    let k = class_count(n);
    let dk = k.saturating_sub(3).max(1);
    let critical = chi_square_critical_value(alpha, dk, source)?;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Edges: sample min, fitted quantiles at non-exceedance j / k for
    // j = 1..k-1, sample max. The fitted quantile takes an exceedance
    // probability, so pass 1 - j / k. A poorly fitting distribution can
    // put a boundary outside the sample range; clamping keeps the
    // partition valid and lets the outer classes absorb it, scoring the
    // emptied classes as (0 - ft)^2 / ft.
    let mut edges = Vec::with_capacity(k + 1);
    edges.push(min);
    for j in 1..k {
        let boundary = fit.quantile(1.0 - j as f64 / k as f64);
        edges.push(boundary.clamp(min, max));
    }
    edges.push(max);

    let degenerate =
        edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[0] > w[1]);
    if degenerate {
        tracing::warn!(k, "degenerate chi-square class boundaries, rejecting fit");
        return Ok(ChiSquareReport {
            classes: Vec::new(),
            statistic: f64::INFINITY,
            critical,
            degrees_of_freedom: dk,
            n_classes: k,
            alpha,
            accepted: false,
        });
    }

    let expected = n as f64 / k as f64;
    let mut classes = Vec::with_capacity(k);
    let mut statistic = 0.0;
    for i in 0..k {
        let lower = edges[i];
        let upper = edges[i + 1];
        // Classes are (lower, upper]; the first also contains its lower
        // edge so the sample minimum is counted.
        let observed = values
            .iter()
            .filter(|&&v| (v > lower || (i == 0 && v >= lower)) && v <= upper)
            .count();
        statistic += (observed as f64 - expected).powi(2) / expected;
        classes.push(ChiSquareClass {
            lower,
            upper,
            observed,
            expected,
        });
    }

    Ok(ChiSquareReport {
        classes,
        statistic,
        critical,
        degrees_of_freedom: dk,
        n_classes: k,
        alpha,
        accepted: statistic <= critical,
    })
}
