//! Key = value text rendering of an analysis report.

use crate::AnalysisReport;
use anfrek_distribution::DistributionKind;
use std::fmt::Write;

fn key_suffix(kind: DistributionKind) -> &'static str {
    match kind {
        DistributionKind::Normal => "NORMAL",
        DistributionKind::LogNormal => "LOGNORMAL",
        DistributionKind::Gumbel => "GUMBEL",
        DistributionKind::LogPearson3 => "LOGPEARSON3",
    }
}

/// Renders the consolidated text report: key = value lines grouped under
/// bracketed section headers. Sub-results missing because a fit failed
/// render as NaN so every key is always present.
pub fn render_text(report: &AnalysisReport) -> String {
    let d = &report.describe;
    let s = &report.shape;
    let o = &report.outlier;

    // All distributions share alpha, n, and source, so the critical
    // values are identical; take them from the first surviving fit.
    let delta_critical = report
        .distributions
        .iter()
        .find_map(|a| a.ks.as_ref().map(|k| k.critical))
        .unwrap_or(f64::NAN);
    let x2_critical = report
        .distributions
        .iter()
        .find_map(|a| a.chi_square.as_ref().map(|c| c.critical))
        .unwrap_or(f64::NAN);

    let mut out = String::new();
    let _ = writeln!(out, "[DESCRIPTIVE]");
    let _ = writeln!(out, "COUNT = {}", d.count);
    let _ = writeln!(out, "MEAN = {}", d.mean);
    let _ = writeln!(out, "STD = {}", d.std);
    let _ = writeln!(out, "STD0 = {}", d.std0);
    let _ = writeln!(out, "MIN = {}", d.min);
    let _ = writeln!(out, "25P = {}", d.p25);
    let _ = writeln!(out, "50P = {}", d.p50);
    let _ = writeln!(out, "75P = {}", d.p75);
    let _ = writeln!(out, "MAX = {}", d.max);
    let _ = writeln!(out);
    let _ = writeln!(out, "[DISTRIBUTION]");
    let _ = writeln!(out, "Cv = {}", s.cv);
    let _ = writeln!(out, "Cs = {}", s.cs);
    let _ = writeln!(out, "Ck = {}", s.ck);
    let _ = writeln!(out);
    let _ = writeln!(out, "[OUTLIER]");
    let _ = writeln!(out, "N = {}", o.n);
    let _ = writeln!(out, "Kn = {}", o.kn);
    let _ = writeln!(out, "MEAN_LOG = {}", o.mean_log);
    let _ = writeln!(out, "STD_LOG = {}", o.std_log);
    let _ = writeln!(out, "LOWER_BOUND = {}", o.lower);
    let _ = writeln!(out, "UPPER_BOUND = {}", o.upper);
    let _ = writeln!(out);
    let _ = writeln!(out, "[GOODNESS OF FIT]");
    let _ = writeln!(out, "N = {}", report.n_valid);
    let _ = writeln!(out);
    let _ = writeln!(out, "[KOLMOGOROV-SMIRNOV]");
    let _ = writeln!(out, "DELTA_CRITICAL = {}", delta_critical);
    for analysis in &report.distributions {
        let delta = analysis
            .ks
            .as_ref()
            .map_or(f64::NAN, |k| k.statistic);
        let _ = writeln!(out, "DELTA_{} = {}", key_suffix(analysis.kind), delta);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[CHI SQUARE]");
    let _ = writeln!(out, "X2_CRITICAL = {}", x2_critical);
    for analysis in &report.distributions {
        let x2 = analysis
            .chi_square
            .as_ref()
            .map_or(f64::NAN, |c| c.statistic);
        let _ = writeln!(out, "X2_{} = {}", key_suffix(analysis.kind), x2);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, AnalysisConfig};
    use anfrek_stats::Sample;

    fn sample() -> Sample {
        let values: Vec<f64> = (0..24)
            .map(|i| 850.0 + 120.0 * i as f64 + if i % 2 == 0 { 95.0 } else { -40.0 })
            .collect();
        Sample::from_values(values).unwrap()
    }

    #[test]
    fn all_sections_and_keys_are_present() {
        let report = analyze(&sample(), &AnalysisConfig::default()).unwrap();
        let text = render_text(&report);

        for header in [
            "[DESCRIPTIVE]",
            "[DISTRIBUTION]",
            "[OUTLIER]",
            "[GOODNESS OF FIT]",
            "[KOLMOGOROV-SMIRNOV]",
            "[CHI SQUARE]",
        ] {
            assert!(text.contains(header), "missing {header}");
        }
        for key in [
            "COUNT = ", "MEAN = ", "STD = ", "STD0 = ", "MIN = ", "25P = ", "50P = ", "75P = ",
            "MAX = ", "Cv = ", "Cs = ", "Ck = ", "Kn = ", "MEAN_LOG = ", "STD_LOG = ",
            "LOWER_BOUND = ", "UPPER_BOUND = ", "DELTA_CRITICAL = ", "DELTA_NORMAL = ",
            "DELTA_LOGNORMAL = ", "DELTA_GUMBEL = ", "DELTA_LOGPEARSON3 = ", "X2_CRITICAL = ",
            "X2_NORMAL = ", "X2_LOGNORMAL = ", "X2_GUMBEL = ", "X2_LOGPEARSON3 = ",
        ] {
            assert!(text.contains(key), "missing {key}");
        }
    }

    #[test]
    fn counts_render_as_integers() {
        let report = analyze(&sample(), &AnalysisConfig::default()).unwrap();
        let text = render_text(&report);
        assert!(text.contains("COUNT = 24"));
        assert!(text.contains("N = 24"));
    }

    #[test]
    fn failed_fits_render_as_nan() {
        // A negative value sinks both log-based families.
        let mut values: Vec<f64> = (0..20).map(|i| 500.0 + 30.0 * i as f64).collect();
        values[3] = -12.0;
        let sample = Sample::from_values(values).unwrap();
        let report = analyze(&sample, &AnalysisConfig::default()).unwrap();
        let text = render_text(&report);
        assert!(text.contains("DELTA_LOGNORMAL = NaN"));
        assert!(text.contains("DELTA_LOGPEARSON3 = NaN"));
        assert!(text.contains("X2_LOGPEARSON3 = NaN"));
        assert!(!text.contains("DELTA_NORMAL = NaN"));
    }
}
