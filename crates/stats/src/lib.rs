//! Sample model and descriptive statistics for annual extreme-value series.
//!
//! This crate holds the data model and order/moment statistics that every
//! other `anfrek` crate builds on:
//!
//! - [`Sample`]: an annual series of (year, value) pairs. Exact zeros and
//!   NaN are treated as missing for distribution fitting but retained for
//!   raw descriptive statistics.
//! - [`describe`]: count/mean/std/percentile summary (R type-7 quantiles).
//! - [`shape_coefficients`]: Cv/Cs/Ck with the small-sample bias
//!   corrections conventional in hydrology, used for distribution
//!   selection guidance.
//! - [`outlier_bounds`]: log-space Kn outlier test (Bulletin 17B
//!   coefficients), flagging high/low outliers without removing them.

mod describe;
mod error;
pub mod interp;
pub mod moments;
mod outlier;
mod sample;
mod shape;

pub use describe::{describe, Describe};
pub use error::StatsError;
pub use outlier::{outlier_bounds, OutlierBounds, OutlierFlag};
pub use sample::Sample;
pub use shape::{shape_coefficients, ShapeCoefficients};
