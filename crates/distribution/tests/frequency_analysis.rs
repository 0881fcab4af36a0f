use anfrek_distribution::{
    frequency, FittedDistribution, GumbelFit, GumbelSource, LogNormalFit, LogPearson3Fit,
    LogPearson3Source, NormalFit, NormalSource,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal as NormalDist};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 32 synthetic annual maxima drawn from N(2850, 950), truncated positive
/// so the log-based fits accept them.
fn synthetic_annual_maxima(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = NormalDist::new(2850.0, 950.0).expect("valid normal params");
    (0..32)
        .map(|_| loop {
            let v: f64 = dist.sample(&mut rng);
            if v > 0.0 {
                break v;
            }
        })
        .collect()
}

fn all_fits(values: &[f64]) -> Vec<FittedDistribution> {
    vec![
        NormalFit::fit(values, NormalSource::Exact).unwrap().into(),
        LogNormalFit::fit(values, NormalSource::Exact)
            .unwrap()
            .into(),
        GumbelFit::fit(values, GumbelSource::Gumbel).unwrap().into(),
        LogPearson3Fit::fit(values, LogPearson3Source::Exact)
            .unwrap()
            .into(),
    ]
}

// ---------------------------------------------------------------------------
// 1. strictly increasing magnitudes over standard periods
// ---------------------------------------------------------------------------
#[test]
fn magnitudes_strictly_increase_with_return_period() {
    let values = synthetic_annual_maxima(42);
    let periods = [2u32, 5, 10, 25, 50, 100];

    for fit in all_fits(&values) {
        let result = frequency::estimate(&fit, &periods);
        let mags = result.magnitudes();
        for w in mags.windows(2) {
            assert!(
                w[1] > w[0],
                "{:?}: magnitudes not increasing: {w:?}",
                fit.kind()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 2. round trip through the CDF recovers 1/T for every source
// ---------------------------------------------------------------------------
#[test]
fn round_trip_recovers_exceedance_probability() {
    let values = synthetic_annual_maxima(7);
    let periods = [2.0, 5.0, 10.0, 25.0, 50.0, 100.0];

    let cases: Vec<(FittedDistribution, f64)> = vec![
        (
            NormalFit::fit(&values, NormalSource::Exact).unwrap().into(),
            1e-8,
        ),
        (
            NormalFit::fit(&values, NormalSource::Soewarno)
                .unwrap()
                .into(),
            1e-3,
        ),
        (
            LogNormalFit::fit(&values, NormalSource::Exact)
                .unwrap()
                .into(),
            1e-8,
        ),
        (
            LogNormalFit::fit(&values, NormalSource::Soewarno)
                .unwrap()
                .into(),
            1e-3,
        ),
        (
            GumbelFit::fit(&values, GumbelSource::Moments).unwrap().into(),
            1e-10,
        ),
        (
            GumbelFit::fit(&values, GumbelSource::Gumbel).unwrap().into(),
            1e-10,
        ),
        (
            GumbelFit::fit(&values, GumbelSource::Soewarno)
                .unwrap()
                .into(),
            1e-10,
        ),
        (
            GumbelFit::fit(&values, GumbelSource::Soetopo)
                .unwrap()
                .into(),
            1e-10,
        ),
        (
            GumbelFit::fit(&values, GumbelSource::Powell).unwrap().into(),
            1e-10,
        ),
        (
            LogPearson3Fit::fit(&values, LogPearson3Source::Exact)
                .unwrap()
                .into(),
            1e-7,
        ),
        (
            LogPearson3Fit::fit(&values, LogPearson3Source::Soewarno)
                .unwrap()
                .into(),
            1e-7,
        ),
        (
            LogPearson3Fit::fit(&values, LogPearson3Source::Soetopo)
                .unwrap()
                .into(),
            1e-7,
        ),
        (
            LogPearson3Fit::fit(&values, LogPearson3Source::Limantara)
                .unwrap()
                .into(),
            1e-7,
        ),
    ];

    for (fit, tol) in cases {
        for &t in &periods {
            let x = fit.quantile(1.0 / t);
            let recovered = 1.0 - fit.cdf(x);
            assert!(
                (recovered - 1.0 / t).abs() < tol,
                "{:?}: T={t}, recovered {recovered}",
                fit.kind()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 3. duplicates and order preservation
// ---------------------------------------------------------------------------
#[test]
fn duplicate_periods_yield_identical_entries() {
    let values = synthetic_annual_maxima(3);
    let fit: FittedDistribution = NormalFit::fit(&values, NormalSource::Exact)
        .unwrap()
        .into();
    let result = frequency::estimate(&fit, &[50, 2, 50, 2]);
    assert_eq!(result.periods(), &[50, 2, 50, 2]);
    assert_eq!(result.magnitudes()[0], result.magnitudes()[2]);
    assert_eq!(result.magnitudes()[1], result.magnitudes()[3]);
}

// ---------------------------------------------------------------------------
// 4. normal estimate lands near the theoretical quantile
// ---------------------------------------------------------------------------
#[test]
fn normal_estimate_tracks_population_quantile() {
    let values = synthetic_annual_maxima(99);
    let fit: FittedDistribution = NormalFit::fit(&values, NormalSource::Exact)
        .unwrap()
        .into();
    // Population x(100) = 2850 + 2.326 * 950 ~ 5060; with n = 32 the
    // sampling error is generous but bounded.
    let x100 = fit.quantile(0.01);
    assert!(
        (3500.0..6500.0).contains(&x100),
        "x(100) = {x100} implausible for N(2850, 950)"
    );
}
