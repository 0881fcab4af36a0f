use anfrek_stats::{describe, outlier_bounds, shape_coefficients, OutlierFlag, Sample};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal};

/// Generates a synthetic annual-maximum series from a log-normal
/// distribution, the usual shape of rainfall maxima.
fn synthetic_maxima(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(5.0, 0.3).expect("valid lognormal params");
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

#[test]
fn describe_invariants_on_random_sample() {
    let sample = Sample::from_values(synthetic_maxima(40, 7)).unwrap();
    let d = describe(&sample).unwrap();

    assert_eq!(d.count, 40);
    assert!(d.std0 <= d.std, "std0 {} > std {}", d.std0, d.std);
    assert!(d.min <= d.p25 && d.p25 <= d.p50 && d.p50 <= d.p75 && d.p75 <= d.max);
    assert!(d.mean > 0.0 && d.mean.is_finite());
}

#[test]
fn shape_coefficients_of_lognormal_sample_skew_right() {
    let sample = Sample::from_values(synthetic_maxima(200, 11)).unwrap();
    let c = shape_coefficients(&sample).unwrap();
    assert!(c.cs > 0.0, "log-normal data should skew right, Cs = {}", c.cs);
    assert!(c.cv > 0.0 && c.cv.is_finite());
    assert!(c.ck.is_finite());
}

#[test]
fn single_far_outlier_is_flagged_high_only() {
    let mut values = synthetic_maxima(30, 3);
    values.push(1.0e6);
    let sample = Sample::from_values(values.clone()).unwrap();
    let b = outlier_bounds(&sample);

    assert_eq!(b.flag(1.0e6), OutlierFlag::High);
    let flagged: usize = values[..30]
        .iter()
        .filter(|&&v| b.flag(v) != OutlierFlag::Within)
        .count();
    assert_eq!(flagged, 0, "clean values must stay inside the bounds");
}

#[test]
fn zeros_excluded_from_outlier_test_but_kept_in_describe() {
    let mut values = synthetic_maxima(25, 9);
    values.push(0.0);
    values.push(0.0);
    let sample = Sample::from_values(values).unwrap();

    let d = describe(&sample).unwrap();
    assert_eq!(d.count, 27);
    assert_eq!(d.min, 0.0);

    let b = outlier_bounds(&sample);
    assert_eq!(b.n, 25);
    assert!(b.lower.is_finite() && b.upper.is_finite());
}
