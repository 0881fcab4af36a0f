//! Consolidated flood-frequency analysis over all candidate distributions.
//!
//! [`analyze`] runs one sample through the full pipeline: descriptive
//! statistics, shape coefficients, the outlier test, and then for each of
//! the four distribution families a fit, a frequency table, and both
//! goodness-of-fit tests with caller-chosen sources. A distribution whose
//! fit fails (for example a log-based family on non-positive data) is
//! reported with its error message while the others still complete; only
//! sample-level validation fails the whole request.
//!
//! The outcome renders two ways: [`render_text`] produces the
//! key = value report grouped under bracketed section headers, and
//! [`output::to_json`] the full machine-readable form.

mod config;
mod error;
pub mod output;
mod parse;
mod text;

use anfrek_distribution::frequency::{estimate, FrequencyResult};
use anfrek_distribution::{
    DistributionError, DistributionKind, FittedDistribution, GumbelFit, LogNormalFit,
    LogPearson3Fit, NormalFit,
};
use anfrek_gof::{chi_square, kolmogorov_smirnov, ChiSquareReport, KsReport};
use anfrek_stats::{
    describe, outlier_bounds, shape_coefficients, Describe, OutlierBounds, Sample,
    ShapeCoefficients,
};

pub use config::AnalysisConfig;
pub use error::ReportError;
pub use parse::parse_return_periods;
pub use text::render_text;

/// Everything computed for a single distribution family.
///
/// A failed fit leaves the sub-results `None` and records the error
/// message; the rest of the report is unaffected.
#[derive(Debug, Clone)]
pub struct DistributionAnalysis {
    /// Which family this column-group belongs to.
    pub kind: DistributionKind,
    /// Magnitudes per requested return period, in caller order.
    pub frequency: Option<FrequencyResult>,
    /// Kolmogorov-Smirnov detail and verdict.
    pub ks: Option<KsReport>,
    /// Chi-square detail and verdict.
    pub chi_square: Option<ChiSquareReport>,
    /// Why the fit failed, when it did.
    pub error: Option<String>,
}

/// Full outcome of one analysis run.
///
/// Distribution column-groups are always in the stable order Normal,
/// Log-Normal, Gumbel, Log-Pearson III.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Significance level the tests used.
    pub alpha: f64,
    /// Requested return periods, in caller order.
    pub return_periods: Vec<u32>,
    /// Number of valid (non-zero, non-NaN) values the fits ran on.
    pub n_valid: usize,
    /// Descriptive statistics of the raw column.
    pub describe: Describe,
    /// Cv, Cs, and Ck of the raw column.
    pub shape: ShapeCoefficients,
    /// Kn outlier-test bounds over the valid values.
    pub outlier: OutlierBounds,
    /// Per-distribution results in stable order.
    pub distributions: Vec<DistributionAnalysis>,
}

impl AnalysisReport {
    /// Finds the column-group for a distribution family.
    pub fn distribution(&self, kind: DistributionKind) -> Option<&DistributionAnalysis> {
        self.distributions.iter().find(|d| d.kind == kind)
    }
}

/// Runs the full frequency analysis of `sample` under `config`.
///
/// # Errors
///
/// Returns [`ReportError::InvalidAlpha`] for a bad significance level,
/// [`ReportError::NoValidPeriods`] for an empty return-period list,
/// [`ReportError::EmptySample`] when every value is excluded as missing
/// data, and [`ReportError::Input`] when the sample is too small for the
/// descriptive statistics. Per-distribution failures do not error; they
/// are recorded on the affected [`DistributionAnalysis`].
pub fn analyze(sample: &Sample, config: &AnalysisConfig) -> Result<AnalysisReport, ReportError> {
    config.validate()?;

    let values = sample.valid_values();
    if values.is_empty() {
        return Err(ReportError::EmptySample);
    }

    let describe = describe(sample)?;
    let shape = shape_coefficients(sample)?;
    let outlier = outlier_bounds(sample);
    tracing::debug!(
        n_raw = sample.len(),
        n_valid = values.len(),
        alpha = config.alpha(),
        "analyzing sample"
    );

    let distributions = DistributionKind::ALL
        .iter()
        .map(|&kind| analyze_distribution(kind, &values, config))
        .collect();

    Ok(AnalysisReport {
        alpha: config.alpha(),
        return_periods: config.return_periods().to_vec(),
        n_valid: values.len(),
        describe,
        shape,
        outlier,
        distributions,
    })
}

fn fit_distribution(
    kind: DistributionKind,
    values: &[f64],
    config: &AnalysisConfig,
) -> Result<FittedDistribution, DistributionError> {
    match kind {
        DistributionKind::Normal => {
            NormalFit::fit(values, config.normal_source()).map(Into::into)
        }
        DistributionKind::LogNormal => {
            LogNormalFit::fit(values, config.lognormal_source()).map(Into::into)
        }
        DistributionKind::Gumbel => {
            GumbelFit::fit(values, config.gumbel_source()).map(Into::into)
        }
        DistributionKind::LogPearson3 => {
            LogPearson3Fit::fit(values, config.logpearson3_source()).map(Into::into)
        }
    }
}

fn analyze_distribution(
    kind: DistributionKind,
    values: &[f64],
    config: &AnalysisConfig,
) -> DistributionAnalysis {
    let fit = match fit_distribution(kind, values, config) {
        Ok(fit) => fit,
        Err(e) => {
            tracing::warn!(distribution = %kind, error = %e, "fit failed");
            return DistributionAnalysis {
                kind,
                frequency: None,
                ks: None,
                chi_square: None,
                error: Some(e.to_string()),
            };
        }
    };

    let frequency = estimate(&fit, config.return_periods());
    let ks = match kolmogorov_smirnov(values, &fit, config.alpha(), config.ks_source()) {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::warn!(distribution = %kind, error = %e, "Kolmogorov-Smirnov test failed");
            None
        }
    };
    let chi = match chi_square(values, &fit, config.alpha(), config.chi_square_source()) {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::warn!(distribution = %kind, error = %e, "chi-square test failed");
            None
        }
    };

    DistributionAnalysis {
        kind,
        frequency: Some(frequency),
        ks,
        chi_square: chi,
        error: None,
    }
}
