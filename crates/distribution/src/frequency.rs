//! Return-period frequency estimates from a fitted distribution.

use crate::FittedDistribution;

/// Magnitude estimates per requested return period.
///
/// Output order mirrors the request order; duplicate periods yield
/// duplicate entries. Entries whose exceedance probability falls outside
/// (0, 1) — e.g. T = 1 — are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResult {
    periods: Vec<u32>,
    magnitudes: Vec<f64>,
}

impl FrequencyResult {
    /// Requested return periods, in request order.
    pub fn periods(&self) -> &[u32] {
        &self.periods
    }

    /// Estimated magnitudes, parallel to [`FrequencyResult::periods`].
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns `true` if no periods were requested.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Iterates (period, magnitude) pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.periods
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }
}

/// Estimates the magnitude for each return period, with exceedance
/// probability 1/T.
///
/// Period validation (dropping zeros, absolute-valuing negatives) is the
/// parsing collaborator's concern; a zero that slips through yields NaN
/// rather than a panic.
pub fn estimate(fit: &FittedDistribution, return_periods: &[u32]) -> FrequencyResult {
    let magnitudes = return_periods
        .iter()
        .map(|&t| {
            if t == 0 {
                f64::NAN
            } else {
                fit.quantile(1.0 / t as f64)
            }
        })
        .collect();
    FrequencyResult {
        periods: return_periods.to_vec(),
        magnitudes,
    }
}
