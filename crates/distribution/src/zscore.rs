//! Standard normal quantile and CDF, exact and approximated.
//!
//! The `Exact` sources go through statrs. The `Soewarno` sources use the
//! Abramowitz & Stegun polynomial approximations 26.2.23 (quantile,
//! |error| < 4.5e-4) and 26.2.17 (CDF, |error| < 7.5e-8) — the analytic
//! form of the reduced-variable tables printed in the hydrology handbooks.
//! Quantile and CDF of a given source are used together so the pair stays
//! mutually consistent.

use statrs::distribution::{ContinuousCDF, Normal};

/// Standard normal distribution.
///
/// # Panics
///
/// Never in practice: (0, 1) is always a valid parameterisation.
fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("(0, 1) is a valid normal parameterisation")
}

/// Exact standard normal quantile for non-exceedance probability `p`.
pub(crate) fn z_exact(p: f64) -> f64 {
    standard_normal().inverse_cdf(p)
}

/// Exact standard normal CDF.
pub(crate) fn phi_exact(z: f64) -> f64 {
    standard_normal().cdf(z)
}

/// Approximate standard normal quantile (Abramowitz & Stegun 26.2.23).
pub(crate) fn z_approx(p: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return f64::NAN;
    }
    let (tail, sign) = if p <= 0.5 { (p, -1.0) } else { (1.0 - p, 1.0) };
    let t = (-2.0 * tail.ln()).sqrt();
    let num = 2.515517 + t * (0.802853 + t * 0.010328);
    let den = 1.0 + t * (1.432788 + t * (0.189269 + t * 0.001308));
    sign * (t - num / den)
}

/// Approximate standard normal CDF (Abramowitz & Stegun 26.2.17).
pub(crate) fn phi_approx(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    let za = z.abs();
    let k = 1.0 / (1.0 + 0.2316419 * za);
    let poly = k
        * (0.319381530
            + k * (-0.356563782 + k * (1.781477937 + k * (-1.821255978 + k * 1.330274429))));
    let density = (-0.5 * za * za).exp() / (2.0 * std::f64::consts::PI).sqrt();
    let tail = density * poly;
    if z >= 0.0 {
        1.0 - tail
    } else {
        tail
    }
}
