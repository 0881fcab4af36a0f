//! Log-space outlier detection for annual maximum series.

use crate::interp;
use crate::moments;
use crate::sample::Sample;
use tracing::debug;

/// Outlier-test coefficient Kn by sample size, 10 percent significance
/// level, one-sided (USWRC Bulletin 17B, Appendix 4). Interpolated
/// linearly between rows, clamped flat outside 10..140.
const KN_TABLE: &[(f64, f64)] = &[
    (10.0, 2.036),
    (11.0, 2.088),
    (12.0, 2.134),
    (13.0, 2.175),
    (14.0, 2.213),
    (15.0, 2.247),
    (16.0, 2.279),
    (17.0, 2.309),
    (18.0, 2.335),
    (19.0, 2.361),
    (20.0, 2.385),
    (21.0, 2.408),
    (22.0, 2.429),
    (23.0, 2.448),
    (24.0, 2.467),
    (25.0, 2.486),
    (26.0, 2.502),
    (27.0, 2.519),
    (28.0, 2.534),
    (29.0, 2.549),
    (30.0, 2.563),
    (31.0, 2.577),
    (32.0, 2.591),
    (33.0, 2.604),
    (34.0, 2.616),
    (35.0, 2.628),
    (36.0, 2.639),
    (37.0, 2.650),
    (38.0, 2.661),
    (39.0, 2.671),
    (40.0, 2.682),
    (45.0, 2.727),
    (50.0, 2.768),
    (55.0, 2.804),
    (60.0, 2.837),
    (65.0, 2.866),
    (70.0, 2.893),
    (75.0, 2.917),
    (80.0, 2.940),
    (85.0, 2.961),
    (90.0, 2.981),
    (95.0, 3.000),
    (100.0, 3.017),
    (110.0, 3.049),
    (120.0, 3.078),
    (130.0, 3.104),
    (140.0, 3.129),
];

/// Looks up the outlier-test coefficient Kn for a sample of size `n`.
pub fn find_kn(n: usize) -> f64 {
    interp::linear(KN_TABLE, n as f64)
}

/// Classification of a single value against the outlier bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlierFlag {
    /// Below the lower bound.
    Low,
    /// Inside the bounds.
    Within,
    /// Above the upper bound.
    High,
}

/// Result of the log-space Kn outlier test.
///
/// Bounds are `10^(mean_log ± Kn * std_log)` over the base-10 logarithms
/// of the valid (zero-excluded) values. Values outside the bounds are
/// flagged, never removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierBounds {
    /// Number of valid values the test ran on.
    pub n: usize,
    /// Outlier-test coefficient for that n.
    pub kn: f64,
    /// Mean of log10 values.
    pub mean_log: f64,
    /// Sample standard deviation of log10 values.
    pub std_log: f64,
    /// Lower outlier bound in original units.
    pub lower: f64,
    /// Upper outlier bound in original units.
    pub upper: f64,
}

impl OutlierBounds {
    /// Classifies a value against the bounds.
    ///
    /// With NaN bounds (degenerate sample) everything is `Within`.
    pub fn flag(&self, value: f64) -> OutlierFlag {
        if value < self.lower {
            OutlierFlag::Low
        } else if value > self.upper {
            OutlierFlag::High
        } else {
            OutlierFlag::Within
        }
    }
}

/// Runs the Kn outlier test on a sample's valid values.
///
/// A degenerate input (fewer than 2 valid values, or non-positive values
/// whose logarithm is undefined) yields NaN bounds rather than an error,
/// so the report layer can still render the remaining sections.
pub fn outlier_bounds(sample: &Sample) -> OutlierBounds {
    let valid = sample.valid_values();
    let n = valid.len();

    if n < 2 {
        debug!(n, "outlier test degenerate: fewer than 2 valid values");
        return OutlierBounds {
            n,
            kn: f64::NAN,
            mean_log: f64::NAN,
            std_log: f64::NAN,
            lower: f64::NAN,
            upper: f64::NAN,
        };
    }

    let logs = moments::log10_values(&valid);
    let mean_log = moments::mean(&logs);
    let std_log = moments::sd(&logs);
    let kn = find_kn(n);

    OutlierBounds {
        n,
        kn,
        mean_log,
        std_log,
        lower: 10f64.powf(mean_log - kn * std_log),
        upper: 10f64.powf(mean_log + kn * std_log),
    }
}
