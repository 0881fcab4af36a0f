//! Linear interpolation over immutable sorted tables.
//!
//! The tabulated coefficients used across the workspace (outlier Kn,
//! Gumbel reduced variates, critical-value tables) are stored as sorted
//! static arrays and read through these helpers. Lookups outside the key
//! range clamp flat to the nearest end — no extrapolation.

/// Interpolates `y` at `x` over `(key, value)` pairs sorted ascending by key.
///
/// Clamps to the first/last value outside the key range.
///
/// # Panics
///
/// Panics if `pairs` is empty.
pub fn linear(pairs: &[(f64, f64)], x: f64) -> f64 {
    assert!(!pairs.is_empty(), "interp::linear: table must not be empty");
    if x <= pairs[0].0 {
        return pairs[0].1;
    }
    let last = pairs[pairs.len() - 1];
    if x >= last.0 {
        return last.1;
    }
    // x is strictly inside the key range here.
    let idx = pairs.partition_point(|&(k, _)| k < x);
    let (x0, y0) = pairs[idx - 1];
    let (x1, y1) = pairs[idx];
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Interpolates over a rectangular grid: `row_keys` x `col_keys`, one row
/// of `values` per row key. Interpolates along columns first, then rows,
/// clamping flat at all four edges.
///
/// # Panics
///
/// Panics if the grid is empty or row lengths do not match `col_keys`.
pub fn bilinear(
    row_keys: &[f64],
    col_keys: &[f64],
    values: &[&[f64]],
    row: f64,
    col: f64,
) -> f64 {
    assert_eq!(
        row_keys.len(),
        values.len(),
        "interp::bilinear: one value row per row key"
    );
    let per_row: Vec<(f64, f64)> = row_keys
        .iter()
        .zip(values.iter())
        .map(|(&rk, vals)| {
            assert_eq!(
                col_keys.len(),
                vals.len(),
                "interp::bilinear: row length must match col_keys"
            );
            let pairs: Vec<(f64, f64)> =
                col_keys.iter().copied().zip(vals.iter().copied()).collect();
            (rk, linear(&pairs, col))
        })
        .collect();
    linear(&per_row, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TABLE: &[(f64, f64)] = &[(10.0, 1.0), (20.0, 2.0), (40.0, 4.0)];

    #[test]
    fn exact_key() {
        assert_relative_eq!(linear(TABLE, 20.0), 2.0);
    }

    #[test]
    fn midpoint() {
        assert_relative_eq!(linear(TABLE, 15.0), 1.5);
        assert_relative_eq!(linear(TABLE, 30.0), 3.0);
    }

    #[test]
    fn clamps_below_and_above() {
        assert_relative_eq!(linear(TABLE, 5.0), 1.0);
        assert_relative_eq!(linear(TABLE, 100.0), 4.0);
    }

    #[test]
    #[should_panic(expected = "table must not be empty")]
    fn empty_table_panics() {
        linear(&[], 1.0);
    }

    #[test]
    fn bilinear_grid() {
        let rows = [1.0, 2.0];
        let cols = [10.0, 20.0];
        let values: [&[f64]; 2] = [&[1.0, 2.0], &[3.0, 4.0]];
        assert_relative_eq!(bilinear(&rows, &cols, &values, 1.0, 10.0), 1.0);
        assert_relative_eq!(bilinear(&rows, &cols, &values, 1.5, 15.0), 2.5);
        // clamped corner
        assert_relative_eq!(bilinear(&rows, &cols, &values, 0.0, 0.0), 1.0);
    }
}
