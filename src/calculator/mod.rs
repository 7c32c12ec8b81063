//! Pure conversion rules for the two calculators.
//!
//! Both functions take inputs that already went through the presence check
//! and always return an [`Outcome`]; missing input is a guidance message, never
//! an error.
//!
//! # Example
//!
//! ```
//! use adops::calculator::compute_cpm;
//! use adops::core::{CpmInputs, MetricLabel, Outcome};
//!
//! let inputs = CpmInputs {
//!     total_cost: Some(500.0),
//!     impressions: Some(10_000.0),
//!     ..Default::default()
//! };
//! assert_eq!(compute_cpm(&inputs), Outcome::value(MetricLabel::Cpm, 50.0));
//! ```

pub mod cpm;
pub mod ctr;

pub use cpm::compute_cpm;
pub use ctr::compute_ctr;

/// Impressions per CPM unit
pub const MILLE: f64 = 1000.0;

/// Fraction to percentage factor
pub const PERCENT: f64 = 100.0;

/// Divide unless the divisor is zero
pub(crate) fn ratio(numerator: f64, divisor: f64) -> Option<f64> {
    (divisor != 0.0).then(|| numerator / divisor)
}
