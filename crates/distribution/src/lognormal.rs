//! Log-Normal distribution fit (base-10 logarithms).

use crate::error::DistributionError;
use crate::normal::NormalSource;
use crate::zscore;
use anfrek_stats::moments;

/// Log-Normal distribution: Normal machinery applied to log10(x),
/// back-transformed through `10^y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormalFit {
    mean_log: f64,
    std_log: f64,
    source: NormalSource,
}

impl LogNormalFit {
    /// Fits mean and sample standard deviation of the base-10 logarithms.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::NonPositiveValue`] if any value has an
    /// undefined logarithm (zeros are excluded upstream as missing data, so
    /// an offender here is a genuine non-positive observation), and
    /// [`DistributionError::TooFewPoints`] for fewer than 2 values.
    pub fn fit(values: &[f64], source: NormalSource) -> Result<Self, DistributionError> {
        if let Some(&bad) = values.iter().find(|v| **v <= 0.0) {
            return Err(DistributionError::NonPositiveValue { value: bad });
        }
        if values.len() < 2 {
            return Err(DistributionError::TooFewPoints {
                needed: 2,
                got: values.len(),
            });
        }
        let logs = moments::log10_values(values);
        Ok(Self {
            mean_log: moments::mean(&logs),
            std_log: moments::sd(&logs),
            source,
        })
    }

    /// Mean of log10 values.
    pub fn mean_log(&self) -> f64 {
        self.mean_log
    }

    /// Sample standard deviation of log10 values.
    pub fn std_log(&self) -> f64 {
        self.std_log
    }

    /// Source used for the quantile factor.
    pub fn source(&self) -> NormalSource {
        self.source
    }

    /// Magnitude with the given exceedance probability,
    /// `10^(mean_log + K * std_log)`.
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
        10f64.powf(self.mean_log + z * self.std_log)
    }

    /// Non-exceedance probability of magnitude `x`; 0 for `x <= 0`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x.log10() - self.mean_log) / self.std_log;
        match self.source {
            NormalSource::Exact => zscore::phi_exact(z),
            NormalSource::Soewarno => zscore::phi_approx(z),
        }
    }
}
