//! Goodness-of-fit tests for frequency-analysis distributions.
//!
//! Two procedures, both comparing a sample's valid values against a
//! [`anfrek_distribution::FittedDistribution`]:
//!
//! - [`kolmogorov_smirnov`]: descending-rank Weibull plotting positions
//!   against the model CDF; statistic D = max |p_w - p_d|.
//! - [`chi_square`]: equal-probability classes through the fitted inverse
//!   CDF; statistic X^2 = sum (fe - ft)^2 / ft.
//!
//! Critical values come from either closed-form/exact sources or the
//! tabulated small-sample tables of the hydrology handbooks, selected per
//! test via [`KsCriticalSource`] and [`ChiSquareCriticalSource`].

mod chi_square;
mod critical;
mod error;
mod ks;

pub use chi_square::{chi_square, ChiSquareClass, ChiSquareReport};
pub use critical::{
    chi_square_critical_value, ks_critical_value, ChiSquareCriticalSource, KsCriticalSource,
};
pub use error::GofError;
pub use ks::{kolmogorov_smirnov, KsReport, KsRow};
