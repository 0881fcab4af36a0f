//! Normal distribution fit.

use crate::error::DistributionError;
use crate::zscore;
use anfrek_stats::moments;

/// Quantile-function source for the Normal (and Log-Normal) fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalSource {
    /// Exact inverse CDF via statrs.
    #[default]
    Exact,
    /// Abramowitz-Stegun polynomial approximation of the reduced-variable
    /// table printed in Soewarno's handbook (|error| < 4.5e-4 in z).
    Soewarno,
}

/// Normal distribution fitted by the method of moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalFit {
    mean: f64,
    std: f64,
    source: NormalSource,
}

impl NormalFit {
    /// Fits mean and sample standard deviation (ddof = 1).
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::TooFewPoints`] for fewer than 2 values.
    pub fn fit(values: &[f64], source: NormalSource) -> Result<Self, DistributionError> {
        if values.len() < 2 {
            return Err(DistributionError::TooFewPoints {
                needed: 2,
                got: values.len(),
            });
        }
        Ok(Self {
            mean: moments::mean(values),
            std: moments::sd(values),
            source,
        })
    }

    /// Fitted mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Fitted sample standard deviation.
    pub fn std(&self) -> f64 {
        self.std
    }

    /// Source used for the quantile factor.
    pub fn source(&self) -> NormalSource {
        self.source
    }

    /// Magnitude with the given exceedance probability, `mean + K * std`.
    ///
    /// Returns NaN when `exceedance` is outside (0, 1).
    pub fn quantile(&self, exceedance: f64) -> f64 {
        if !(exceedance > 0.0 && exceedance < 1.0) {
            return f64::NAN;
        }
        let p = 1.0 - exceedance;
        let z = match self.source {
            NormalSource::Exact => zscore::z_exact(p),
            NormalSource::Soewarno => zscore::z_approx(p),
        };
        self.mean + z * self.std
    }

    /// Non-exceedance probability of magnitude `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.std;
        match self.source {
            NormalSource::Exact => zscore::phi_exact(z),
            NormalSource::Soewarno => zscore::phi_approx(z),
        }
    }
}
