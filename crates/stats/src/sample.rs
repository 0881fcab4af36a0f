//! Annual extreme-value sample.

use crate::error::StatsError;

/// An ordered series of annual extreme values, one numeric column.
///
/// Values of exactly zero mark missing years in the source records; they
/// are excluded from [`Sample::valid_values`] (and therefore from
/// distribution fitting and goodness-of-fit tests) but retained in
/// [`Sample::values`] for raw descriptive statistics. NaN is treated the
/// same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    years: Vec<i32>,
    values: Vec<f64>,
}

impl Sample {
    /// Creates a sample from parallel year and value columns.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] if `values` is empty and
    /// [`StatsError::LengthMismatch`] if the columns differ in length.
    pub fn from_annual(years: Vec<i32>, values: Vec<f64>) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }
        if years.len() != values.len() {
            return Err(StatsError::LengthMismatch {
                years_len: years.len(),
                values_len: values.len(),
            });
        }
        Ok(Self { years, values })
    }

    /// Creates a sample from values alone, numbering years from 1.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] if `values` is empty.
    pub fn from_values(values: Vec<f64>) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }
        let years = (1..=values.len() as i32).collect();
        Ok(Self { years, values })
    }

    /// Year column, parallel to [`Sample::values`].
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Raw value column, zeros and NaN included.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of raw values, zeros and NaN included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sample holds no values.
    ///
    /// Construction rejects empty columns, so this is always `false` for a
    /// successfully built sample; it exists for slice-like completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values usable for distribution fitting: zeros and NaN removed,
    /// original order preserved.
    pub fn valid_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| *v != 0.0 && !v.is_nan())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_annual_valid() {
        let s = Sample::from_annual(vec![1991, 1992], vec![120.0, 95.5]).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.years(), &[1991, 1992]);
    }

    #[test]
    fn from_annual_empty() {
        let r = Sample::from_annual(vec![], vec![]);
        assert!(matches!(r, Err(StatsError::EmptySample)));
    }

    #[test]
    fn from_annual_length_mismatch() {
        let r = Sample::from_annual(vec![1991], vec![120.0, 95.5]);
        assert!(matches!(
            r,
            Err(StatsError::LengthMismatch {
                years_len: 1,
                values_len: 2
            })
        ));
    }

    #[test]
    fn from_values_numbers_years() {
        let s = Sample::from_values(vec![10.0, 20.0, 30.0]).unwrap();
        assert_eq!(s.years(), &[1, 2, 3]);
    }

    #[test]
    fn valid_values_drops_zero_and_nan() {
        let s = Sample::from_values(vec![12.0, 0.0, f64::NAN, 7.5, 0.0]).unwrap();
        assert_eq!(s.valid_values(), vec![12.0, 7.5]);
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn valid_values_keeps_negatives() {
        // Negative values are invalid for log-based fits, but that is the
        // fitting layer's check, not missing-data handling.
        let s = Sample::from_values(vec![-3.0, 4.0]).unwrap();
        assert_eq!(s.valid_values(), vec![-3.0, 4.0]);
    }
}
