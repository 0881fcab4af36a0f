//! Moment and order statistics over plain slices.

/// Arithmetic mean of a slice. Returns NaN if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with N-1 denominator. Returns NaN if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

/// Population variance with N denominator. Returns NaN if empty.
pub fn variance_pop(data: &[f64]) -> f64 {
    let n = data.len();
    if n == 0 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / n as f64
}

/// Sample standard deviation (N-1 denominator).
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Population standard deviation (N denominator).
pub fn sd_pop(data: &[f64]) -> f64 {
    variance_pop(data).sqrt()
}

/// R's default quantile algorithm (type=7): linear interpolation between
/// order statistics.
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Bias-corrected skewness coefficient, the hydrological convention:
/// `n / ((n-1)(n-2)) * sum((x - mean)^3) / sd^3`.
///
/// Returns NaN if fewer than 3 elements (the correction denominator
/// vanishes) or if the spread is zero.
pub fn skewness(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 3 {
        return f64::NAN;
    }
    let nf = n as f64;
    let m = mean(data);
    let s = sd(data);
    let m3: f64 = data.iter().map(|&x| (x - m).powi(3)).sum();
    nf / ((nf - 1.0) * (nf - 2.0)) * m3 / s.powi(3)
}

/// Bias-corrected kurtosis coefficient:
/// `n^2 / ((n-1)(n-2)(n-3)) * sum((x - mean)^4) / sd^4`.
///
/// Returns NaN or infinity for n < 4.
pub fn kurtosis(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let nf = n as f64;
    let m = mean(data);
    let s = sd(data);
    let m4: f64 = data.iter().map(|&x| (x - m).powi(4)).sum();
    nf * nf / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0)) * m4 / s.powi(4)
}

/// Base-10 logarithm of every element.
///
/// Non-positive inputs produce NaN / -inf exactly as `f64::log10` does;
/// callers that need clean log moments must filter first.
pub fn log10_values(data: &[f64]) -> Vec<f64> {
    data.iter().map(|&x| x.log10()).collect()
}
