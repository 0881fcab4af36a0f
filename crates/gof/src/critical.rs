//! Critical-value sources for the goodness-of-fit tests.
//!
//! Tables are immutable sorted arrays interpolated with the
//! `anfrek_stats::interp` helpers; significance levels outside a table's
//! range clamp to the nearest column.

use crate::error::GofError;
use anfrek_stats::interp;
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

/// Kolmogorov limiting-distribution coefficients c(alpha) for the
/// asymptotic critical value c(alpha) / sqrt(n), ascending by alpha.
const KS_ASYMPTOTIC_C: &[(f64, f64)] = &[
    (0.01, 1.63),
    (0.05, 1.36),
    (0.10, 1.22),
    (0.15, 1.14),
    (0.20, 1.07),
];

/// Significance levels of the tabulated columns, ascending.
const TABLE_ALPHA: &[f64] = &[0.01, 0.05, 0.10, 0.20];

/// Sample sizes of the tabulated KS rows, ascending.
const KS_TABLE_N: &[f64] = &[5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0];

/// Smirnov small-sample critical values D(n, alpha), the table reprinted
/// by Soewarno and Soetopo. One row per entry of [`KS_TABLE_N`], columns
/// per [`TABLE_ALPHA`].
const KS_TABLE_D: [&[f64]; 10] = [
    &[0.67, 0.56, 0.51, 0.45],
    &[0.49, 0.41, 0.37, 0.32],
    &[0.40, 0.34, 0.30, 0.27],
    &[0.36, 0.29, 0.26, 0.23],
    &[0.32, 0.27, 0.24, 0.21],
    &[0.29, 0.24, 0.22, 0.19],
    &[0.27, 0.23, 0.21, 0.18],
    &[0.25, 0.21, 0.19, 0.17],
    &[0.24, 0.20, 0.18, 0.16],
    &[0.23, 0.19, 0.17, 0.15],
];

/// Degrees-of-freedom rows of the chi-square table, ascending.
const CHI_TABLE_DK: &[f64] = &[
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0,
    18.0, 19.0, 20.0,
];

/// Upper chi-square critical values X^2(dk, alpha), columns per
/// [`TABLE_ALPHA`].
const CHI_TABLE_X: [&[f64]; 20] = [
    &[6.635, 3.841, 2.706, 1.642],
    &[9.210, 5.991, 4.605, 3.219],
    &[11.345, 7.815, 6.251, 4.642],
    &[13.277, 9.488, 7.779, 5.989],
    &[15.086, 11.070, 9.236, 7.289],
    &[16.812, 12.592, 10.645, 8.558],
    &[18.475, 14.067, 12.017, 9.803],
    &[20.090, 15.507, 13.362, 11.030],
    &[21.666, 16.919, 14.684, 12.242],
    &[23.209, 18.307, 15.987, 13.442],
    &[24.725, 19.675, 17.275, 14.631],
    &[26.217, 21.026, 18.549, 15.812],
    &[27.688, 22.362, 19.812, 16.985],
    &[29.141, 23.685, 21.064, 18.151],
    &[30.578, 24.996, 22.307, 19.311],
    &[32.000, 26.296, 23.542, 20.465],
    &[33.409, 27.587, 24.769, 21.615],
    &[34.805, 28.869, 25.989, 22.760],
    &[36.191, 30.144, 27.204, 23.900],
    &[37.566, 31.410, 28.412, 25.038],
];

/// Critical-value source for the Kolmogorov-Smirnov test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KsCriticalSource {
    /// Asymptotic closed form c(alpha) / sqrt(n).
    #[default]
    Asymptotic,
    /// Soewarno's reprint of the Smirnov small-sample table.
    Soewarno,
    /// Soetopo's reprint of the Smirnov small-sample table.
    Soetopo,
}

/// Critical-value source for the chi-square test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChiSquareCriticalSource {
    /// Exact chi-square inverse CDF via statrs.
    #[default]
    Exact,
    /// Limantara's tabulated upper critical values, Wilson-Hilferty
    /// approximation beyond dk = 20.
    Limantara,
}

fn validate_alpha(alpha: f64) -> Result<(), GofError> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(GofError::InvalidAlpha { alpha })
    }
}

fn ks_asymptotic(alpha: f64, n: usize) -> f64 {
    interp::linear(KS_ASYMPTOTIC_C, alpha) / (n as f64).sqrt()
}

/// Critical value for the Kolmogorov-Smirnov statistic D.
///
/// Table sources interpolate over n and alpha; outside the tabulated
/// range of n (below 5 or above 50) they fall back to the asymptotic
/// formula rather than extrapolating.
///
/// # Errors
///
/// Returns [`GofError::InvalidAlpha`] when `alpha` is outside (0, 1).
pub fn ks_critical_value(
    alpha: f64,
    n: usize,
    source: KsCriticalSource,
) -> Result<f64, GofError> {
    validate_alpha(alpha)?;
    let value = match source {
        KsCriticalSource::Asymptotic => ks_asymptotic(alpha, n),
        KsCriticalSource::Soewarno | KsCriticalSource::Soetopo => {
            let nf = n as f64;
            if !(KS_TABLE_N[0]..=KS_TABLE_N[KS_TABLE_N.len() - 1]).contains(&nf) {
                ks_asymptotic(alpha, n)
            } else {
                interp::bilinear(KS_TABLE_N, TABLE_ALPHA, &KS_TABLE_D, nf, alpha)
            }
        }
    };
    Ok(value)
}

/// Upper standard normal quantile used by the Wilson-Hilferty fallback.
fn z_upper(alpha: f64) -> Result<f64, GofError> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| GofError::CriticalValue {
        message: e.to_string(),
    })?;
    Ok(normal.inverse_cdf(1.0 - alpha))
}

/// Critical value for the chi-square statistic X^2 at `dk` degrees of
/// freedom.
///
/// # Errors
///
/// Returns [`GofError::InvalidAlpha`] when `alpha` is outside (0, 1), and
/// [`GofError::CriticalValue`] when the exact distribution cannot be
/// constructed (dk = 0).
pub fn chi_square_critical_value(
    alpha: f64,
    dk: usize,
    source: ChiSquareCriticalSource,
) -> Result<f64, GofError> {
    validate_alpha(alpha)?;
    match source {
        ChiSquareCriticalSource::Exact => {
            let dist = ChiSquared::new(dk as f64).map_err(|e| GofError::CriticalValue {
                message: e.to_string(),
            })?;
            Ok(dist.inverse_cdf(1.0 - alpha))
        }
        ChiSquareCriticalSource::Limantara => {
            let dkf = dk as f64;
            if dkf <= CHI_TABLE_DK[CHI_TABLE_DK.len() - 1] {
                Ok(interp::bilinear(
                    CHI_TABLE_DK,
                    TABLE_ALPHA,
                    &CHI_TABLE_X,
                    dkf,
                    alpha,
                ))
            } else {
                // Wilson-Hilferty approximation for deep tables
                let z = z_upper(alpha)?;
                let h = 2.0 / (9.0 * dkf);
                Ok(dkf * (1.0 - h + z * h.sqrt()).powi(3))
            }
        }
    }
}
