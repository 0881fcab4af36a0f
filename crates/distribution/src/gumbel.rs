//! Gumbel (extreme value type I) distribution fit.

use crate::error::DistributionError;
use anfrek_stats::{interp, moments};

/// Euler-Mascheroni constant, the mean of the reduced Gumbel variate.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Reduced-variate statistics (n, Yn, Sn) from Gumbel's extreme-value
/// tables, as reprinted in the Indonesian hydrology handbooks (Soewarno,
/// Soetopo). Interpolated linearly over n, clamped flat outside 10..100.
const REDUCED_VARIATE: &[(f64, f64, f64)] = &[
    (10.0, 0.4952, 0.9496),
    (15.0, 0.5128, 1.0206),
    (20.0, 0.5236, 1.0628),
    (25.0, 0.5309, 1.0914),
    (30.0, 0.5362, 1.1124),
    (35.0, 0.5403, 1.1285),
    (40.0, 0.5436, 1.1413),
    (45.0, 0.5463, 1.1518),
    (50.0, 0.5485, 1.1607),
    (55.0, 0.5504, 1.1682),
    (60.0, 0.5521, 1.1747),
    (65.0, 0.5535, 1.1803),
    (70.0, 0.5548, 1.1854),
    (75.0, 0.5559, 1.1898),
    (80.0, 0.5569, 1.1938),
    (85.0, 0.5578, 1.1973),
    (90.0, 0.5586, 1.2007),
    (95.0, 0.5593, 1.2038),
    (100.0, 0.5600, 1.2065),
];

/// Looks up (Yn, Sn) for a sample of size `n`.
fn reduced_variate_stats(n: usize) -> (f64, f64) {
    let yn_pairs: Vec<(f64, f64)> = REDUCED_VARIATE.iter().map(|&(k, yn, _)| (k, yn)).collect();
    let sn_pairs: Vec<(f64, f64)> = REDUCED_VARIATE.iter().map(|&(k, _, sn)| (k, sn)).collect();
    (
        interp::linear(&yn_pairs, n as f64),
        interp::linear(&sn_pairs, n as f64),
    )
}

/// Parameter-estimation source for the Gumbel fit.
///
/// Every source reduces to a (location, scale) pair; they differ only in
/// how the reduced-variate mean and deviation are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GumbelSource {
    /// Closed-form method of moments: `scale = std * sqrt(6) / pi`,
    /// `location = mean - gamma * scale`.
    Moments,
    /// Gumbel's reduced-variate table (Yn, Sn keyed by sample size).
    #[default]
    Gumbel,
    /// Soewarno's reprint of the reduced-variate table.
    Soewarno,
    /// Soetopo's reprint of the reduced-variate table.
    Soetopo,
    /// Powell's asymptotic frequency factor (Yn and Sn at their n -> inf
    /// limits, analytically identical to `Moments`).
    Powell,
}

/// Gumbel distribution with quantile
/// `x(T) = location + scale * (-ln(-ln(1 - 1/T)))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GumbelFit {
    location: f64,
    scale: f64,
    source: GumbelSource,
}

impl GumbelFit {
    /// Fits location and scale from the sample moments, through the
    /// convention the source selects.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::TooFewPoints`] for fewer than 2 values.
    pub fn fit(values: &[f64], source: GumbelSource) -> Result<Self, DistributionError> {
        let n = values.len();
        if n < 2 {
            return Err(DistributionError::TooFewPoints { needed: 2, got: n });
        }
        let mean = moments::mean(values);
        let std = moments::sd(values);

        let (location, scale) = match source {
            GumbelSource::Moments | GumbelSource::Powell => {
                let scale = std * 6f64.sqrt() / std::f64::consts::PI;
                (mean - EULER_GAMMA * scale, scale)
            }
            GumbelSource::Gumbel | GumbelSource::Soewarno | GumbelSource::Soetopo => {
                let (yn, sn) = reduced_variate_stats(n);
                (mean - std * yn / sn, std / sn)
            }
        };

        Ok(Self {
            location,
            scale,
            source,
        })
    }

    /// Location parameter (mode).
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Source the parameters were estimated with.
    pub fn source(&self) -> GumbelSource {
        self.source
    }

    /// Magnitude with the given exceedance probability.
    ///
    /// Returns NaN when `exceedance` is outside (0, 1).
    pub fn quantile(&self, exceedance: f64) -> f64 {
        if !(exceedance > 0.0 && exceedance < 1.0) {
            return f64::NAN;
        }
        let y = -(-(1.0 - exceedance).ln()).ln();
        self.location + self.scale * y
    }

    /// Non-exceedance probability of magnitude `x`,
    /// `exp(-exp(-(x - location) / scale))`.
    pub fn cdf(&self, x: f64) -> f64 {
        (-(-(x - self.location) / self.scale).exp()).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// 20 plausible annual maxima with mean 100 and a spread near 20.
    fn sample() -> Vec<f64> {
        vec![
            78.0, 112.0, 95.0, 140.0, 88.0, 103.0, 121.0, 99.0, 76.0, 131.0, 109.0, 92.0, 118.0,
            85.0, 127.0, 97.0, 104.0, 73.0, 115.0, 137.0,
        ]
    }

    #[test]
    fn moments_fit_closed_form() {
        // mean 100, std 20 exactly: two symmetric points
        let fit = GumbelFit::fit(
            &[80.0, 120.0, 100.0, 100.0, 80.0, 120.0],
            GumbelSource::Moments,
        )
        .unwrap();
        let std = moments::sd(&[80.0, 120.0, 100.0, 100.0, 80.0, 120.0]);
        let scale = std * 6f64.sqrt() / std::f64::consts::PI;
        assert_relative_eq!(fit.scale(), scale, epsilon = 1e-12);
        assert_relative_eq!(fit.location(), 100.0 - EULER_GAMMA * scale, epsilon = 1e-12);
    }

    #[test]
    fn moments_quantile_known_value() {
        // mean 100, std 20: scale = 15.59394, location = 90.99832,
        // y(T=10) = 2.250367 so x(10) = 126.090.
        let values = [80.0, 120.0, 100.0, 100.0, 80.0, 120.0];
        let std = moments::sd(&values);
        let fit = GumbelFit::fit(&values, GumbelSource::Moments).unwrap();
        let scale = std * 6f64.sqrt() / std::f64::consts::PI;
        let expected = 100.0 - EULER_GAMMA * scale + scale * 2.250367;
        assert_relative_eq!(fit.quantile(0.1), expected, epsilon = 1e-5);
    }

    #[test]
    fn powell_matches_moments() {
        let s = sample();
        let a = GumbelFit::fit(&s, GumbelSource::Moments).unwrap();
        let b = GumbelFit::fit(&s, GumbelSource::Powell).unwrap();
        assert_relative_eq!(a.location(), b.location(), epsilon = 1e-12);
        assert_relative_eq!(a.scale(), b.scale(), epsilon = 1e-12);
    }

    #[test]
    fn table_fit_close_to_moments() {
        // For n = 20 the tabulated (Yn, Sn) sit near the asymptotic values,
        // so the two conventions agree loosely.
        let s = sample();
        let table = GumbelFit::fit(&s, GumbelSource::Gumbel).unwrap();
        let mom = GumbelFit::fit(&s, GumbelSource::Moments).unwrap();
        let rel = (table.quantile(0.01) - mom.quantile(0.01)).abs() / mom.quantile(0.01);
        assert!(rel < 0.15, "conventions diverge too far: {rel}");
    }

    #[test]
    fn reduced_variate_interpolates() {
        let (yn, sn) = reduced_variate_stats(32);
        // between n=30 (0.5362, 1.1124) and n=35 (0.5403, 1.1285)
        assert!(yn > 0.5362 && yn < 0.5403);
        assert!(sn > 1.1124 && sn < 1.1285);
        // clamped ends
        assert_eq!(reduced_variate_stats(5), (0.4952, 0.9496));
        assert_eq!(reduced_variate_stats(400), (0.5600, 1.2065));
    }

    #[test]
    fn quantile_monotone_in_return_period() {
        let fit = GumbelFit::fit(&sample(), GumbelSource::Gumbel).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for t in [2.0, 5.0, 10.0, 25.0, 50.0, 100.0] {
            let x = fit.quantile(1.0 / t);
            assert!(x > prev, "not increasing at T={t}");
            prev = x;
        }
    }

    #[test]
    fn cdf_quantile_round_trip() {
        for source in [GumbelSource::Moments, GumbelSource::Gumbel] {
            let fit = GumbelFit::fit(&sample(), source).unwrap();
            for t in [2.0, 5.0, 10.0, 25.0, 50.0, 100.0] {
                let x = fit.quantile(1.0 / t);
                assert_abs_diff_eq!(1.0 - fit.cdf(x), 1.0 / t, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn out_of_domain_probability_is_nan() {
        let fit = GumbelFit::fit(&sample(), GumbelSource::Moments).unwrap();
        assert!(fit.quantile(0.0).is_nan());
        assert!(fit.quantile(1.0).is_nan());
    }
}
