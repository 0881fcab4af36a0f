//! Kolmogorov-Smirnov test against a fitted distribution.

use crate::critical::{ks_critical_value, KsCriticalSource};
use crate::error::GofError;
use anfrek_distribution::FittedDistribution;

/// One ranked observation with its plotting position and model CDF.
#[derive(Debug, Clone, PartialEq)]
pub struct KsRow {
    /// Rank in descending order, starting at 1.
    pub rank: usize,
    /// Observed value.
    pub value: f64,
    /// Weibull plotting position 1 - r / (n + 1).
    pub empirical: f64,
    /// Non-exceedance probability under the fitted distribution.
    pub model: f64,
    /// Absolute deviation between empirical and model probabilities.
    pub deviation: f64,
}

/// Full outcome of a Kolmogorov-Smirnov test.
#[derive(Debug, Clone, PartialEq)]
pub struct KsReport {
    /// Per-observation deviations, descending by value.
    pub rows: Vec<KsRow>,
    /// Largest absolute deviation D.
    pub statistic: f64,
    /// Critical value D_crit at the requested significance level.
    pub critical: f64,
    /// Significance level the test was run at.
    pub alpha: f64,
    /// Whether D <= D_crit.
    pub accepted: bool,
}

/// Runs the Kolmogorov-Smirnov test of `values` against `fit`.
///
/// Observations are ranked in descending order; the empirical
/// non-exceedance probability of rank r is the Weibull plotting position
/// 1 - r / (n + 1), compared against the fitted CDF at each value.
///
/// # Errors
///
/// Returns [`GofError::EmptySample`] when `values` is empty and
/// [`GofError::InvalidAlpha`] when `alpha` is outside (0, 1).
pub fn kolmogorov_smirnov(
    values: &[f64],
    fit: &FittedDistribution,
    alpha: f64,
    source: KsCriticalSource,
) -> Result<KsReport, GofError> {
    if values.is_empty() {
        return Err(GofError::EmptySample);
    }
    let n = values.len();
    let critical = ks_critical_value(alpha, n, source)?;
    if n < 5 {
        tracing::warn!(n, "Kolmogorov-Smirnov test on a very small sample");
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let rows: Vec<KsRow> = sorted
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let rank = i + 1;
            let empirical = 1.0 - rank as f64 / (n as f64 + 1.0);
            let model = fit.cdf(value);
            KsRow {
                rank,
                value,
                empirical,
                model,
                deviation: (empirical - model).abs(),
            }
        })
        .collect();

    let statistic = rows.iter().fold(0.0_f64, |acc, r| acc.max(r.deviation));

    Ok(KsReport {
        rows,
        statistic,
        critical,
        alpha,
        accepted: statistic <= critical,
    })
}
