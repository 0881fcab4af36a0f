//! Analysis configuration.

use crate::error::ReportError;
use anfrek_distribution::{GumbelSource, LogPearson3Source, NormalSource};
use anfrek_gof::{ChiSquareCriticalSource, KsCriticalSource};

/// Configuration for one analysis run: significance level, return
/// periods, and the computation source per distribution and per test.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    alpha: f64,
    return_periods: Vec<u32>,
    normal_source: NormalSource,
    lognormal_source: NormalSource,
    gumbel_source: GumbelSource,
    logpearson3_source: LogPearson3Source,
    ks_source: KsCriticalSource,
    chi_square_source: ChiSquareCriticalSource,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            return_periods: vec![2, 5, 10, 25, 50, 100],
            normal_source: NormalSource::default(),
            lognormal_source: NormalSource::default(),
            gumbel_source: GumbelSource::default(),
            logpearson3_source: LogPearson3Source::default(),
            ks_source: KsCriticalSource::default(),
            chi_square_source: ChiSquareCriticalSource::default(),
        }
    }
}

impl AnalysisConfig {
    /// Set the significance level for both goodness-of-fit tests.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the return periods of the frequency table, in caller order.
    pub fn with_return_periods(mut self, periods: Vec<u32>) -> Self {
        self.return_periods = periods;
        self
    }

    /// Set the quantile source for the Normal distribution.
    pub fn with_normal_source(mut self, source: NormalSource) -> Self {
        self.normal_source = source;
        self
    }

    /// Set the quantile source for the Log-Normal distribution.
    pub fn with_lognormal_source(mut self, source: NormalSource) -> Self {
        self.lognormal_source = source;
        self
    }

    /// Set the fitting source for the Gumbel distribution.
    pub fn with_gumbel_source(mut self, source: GumbelSource) -> Self {
        self.gumbel_source = source;
        self
    }

    /// Set the frequency-factor source for Log-Pearson III.
    pub fn with_logpearson3_source(mut self, source: LogPearson3Source) -> Self {
        self.logpearson3_source = source;
        self
    }

    /// Set the Kolmogorov-Smirnov critical-value source.
    pub fn with_ks_source(mut self, source: KsCriticalSource) -> Self {
        self.ks_source = source;
        self
    }

    /// Set the chi-square critical-value source.
    pub fn with_chi_square_source(mut self, source: ChiSquareCriticalSource) -> Self {
        self.chi_square_source = source;
        self
    }

    /// Returns the significance level.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the return periods in caller order.
    pub fn return_periods(&self) -> &[u32] {
        &self.return_periods
    }

    /// Returns the Normal quantile source.
    pub fn normal_source(&self) -> NormalSource {
        self.normal_source
    }

    /// Returns the Log-Normal quantile source.
    pub fn lognormal_source(&self) -> NormalSource {
        self.lognormal_source
    }

    /// Returns the Gumbel fitting source.
    pub fn gumbel_source(&self) -> GumbelSource {
        self.gumbel_source
    }

    /// Returns the Log-Pearson III frequency-factor source.
    pub fn logpearson3_source(&self) -> LogPearson3Source {
        self.logpearson3_source
    }

    /// Returns the Kolmogorov-Smirnov critical-value source.
    pub fn ks_source(&self) -> KsCriticalSource {
        self.ks_source
    }

    /// Returns the chi-square critical-value source.
    pub fn chi_square_source(&self) -> ChiSquareCriticalSource {
        self.chi_square_source
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidAlpha`] when the significance level
    /// is outside (0, 1) and [`ReportError::NoValidPeriods`] when the
    /// return-period list is empty.
    pub fn validate(&self) -> Result<(), ReportError> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ReportError::InvalidAlpha { alpha: self.alpha });
        }
        if self.return_periods.is_empty() {
            return Err(ReportError::NoValidPeriods);
        }
        Ok(())
    }
}
