//! JSON output structures for analysis reports.

use crate::error::ReportError;
use crate::{AnalysisReport, DistributionAnalysis};
use serde::Serialize;

/// Top-level analysis output.
#[derive(Debug, Serialize)]
pub struct AnalysisOutput {
    /// Significance level and requested periods.
    pub config: ConfigSummary,
    /// Descriptive statistics of the raw column.
    pub descriptive: DescriptiveOutput,
    /// Shape coefficients of the raw column.
    pub shape: ShapeOutput,
    /// Outlier-test bounds.
    pub outlier: OutlierOutput,
    /// Per-distribution column-groups in stable order.
    pub distributions: Vec<DistributionOutput>,
}

/// Summary of the run parameters.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub alpha: f64,
    pub return_periods: Vec<u32>,
    pub n_valid: usize,
}

/// Descriptive statistics record.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptiveOutput {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub std0: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Shape-coefficient triple.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeOutput {
    pub cv: f64,
    pub cs: f64,
    pub ck: f64,
}

/// Outlier-test bounds.
#[derive(Debug, Clone, Serialize)]
pub struct OutlierOutput {
    pub n: usize,
    pub kn: f64,
    pub mean_log: f64,
    pub std_log: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// One distribution's frequency table and test results.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionOutput {
    pub distribution: String,
    pub frequency: Option<Vec<FrequencyRowOutput>>,
    pub kolmogorov_smirnov: Option<KsOutput>,
    pub chi_square: Option<ChiSquareOutput>,
    pub error: Option<String>,
}

/// One row of a frequency table.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyRowOutput {
    pub return_period: u32,
    pub magnitude: f64,
}

/// Kolmogorov-Smirnov detail and verdict.
#[derive(Debug, Clone, Serialize)]
pub struct KsOutput {
    pub statistic: f64,
    pub critical: f64,
    pub accepted: bool,
    pub rows: Vec<KsRowOutput>,
}

/// One ranked KS observation.
#[derive(Debug, Clone, Serialize)]
pub struct KsRowOutput {
    pub rank: usize,
    pub value: f64,
    pub empirical: f64,
    pub model: f64,
    pub deviation: f64,
}

/// Chi-square detail and verdict.
#[derive(Debug, Clone, Serialize)]
pub struct ChiSquareOutput {
    pub statistic: f64,
    pub critical: f64,
    pub degrees_of_freedom: usize,
    pub n_classes: usize,
    pub accepted: bool,
    pub classes: Vec<ChiSquareClassOutput>,
}

/// One chi-square class with observed and expected counts.
#[derive(Debug, Clone, Serialize)]
pub struct ChiSquareClassOutput {
    pub lower: f64,
    pub upper: f64,
    pub observed: usize,
    pub expected: f64,
}

fn distribution_output(analysis: &DistributionAnalysis) -> DistributionOutput {
    DistributionOutput {
        distribution: analysis.kind.to_string(),
        frequency: analysis.frequency.as_ref().map(|f| {
            f.iter()
                .map(|(return_period, magnitude)| FrequencyRowOutput {
                    return_period,
                    magnitude,
                })
                .collect()
        }),
        kolmogorov_smirnov: analysis.ks.as_ref().map(|k| KsOutput {
            statistic: k.statistic,
            critical: k.critical,
            accepted: k.accepted,
            rows: k
                .rows
                .iter()
                .map(|r| KsRowOutput {
                    rank: r.rank,
                    value: r.value,
                    empirical: r.empirical,
                    model: r.model,
                    deviation: r.deviation,
                })
                .collect(),
        }),
        chi_square: analysis.chi_square.as_ref().map(|c| ChiSquareOutput {
            statistic: c.statistic,
            critical: c.critical,
            degrees_of_freedom: c.degrees_of_freedom,
            n_classes: c.n_classes,
            accepted: c.accepted,
            classes: c
                .classes
                .iter()
                .map(|class| ChiSquareClassOutput {
                    lower: class.lower,
                    upper: class.upper,
                    observed: class.observed,
                    expected: class.expected,
                })
                .collect(),
        }),
        error: analysis.error.clone(),
    }
}

impl From<&AnalysisReport> for AnalysisOutput {
    fn from(report: &AnalysisReport) -> Self {
        AnalysisOutput {
            config: ConfigSummary {
                alpha: report.alpha,
                return_periods: report.return_periods.clone(),
                n_valid: report.n_valid,
            },
            descriptive: DescriptiveOutput {
                count: report.describe.count,
                mean: report.describe.mean,
                std: report.describe.std,
                std0: report.describe.std0,
                min: report.describe.min,
                p25: report.describe.p25,
                p50: report.describe.p50,
                p75: report.describe.p75,
                max: report.describe.max,
            },
            shape: ShapeOutput {
                cv: report.shape.cv,
                cs: report.shape.cs,
                ck: report.shape.ck,
            },
            outlier: OutlierOutput {
                n: report.outlier.n,
                kn: report.outlier.kn,
                mean_log: report.outlier.mean_log,
                std_log: report.outlier.std_log,
                lower_bound: report.outlier.lower,
                upper_bound: report.outlier.upper,
            },
            distributions: report.distributions.iter().map(distribution_output).collect(),
        }
    }
}

/// Serializes an analysis report to a JSON string.
///
/// # Errors
///
/// Returns [`ReportError::Serialization`] if serde_json fails.
pub fn to_json(report: &AnalysisReport) -> Result<String, ReportError> {
    let output = AnalysisOutput::from(report);
    serde_json::to_string_pretty(&output).map_err(|e| ReportError::Serialization {
        reason: e.to_string(),
    })
}
