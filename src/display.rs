//! Rendering outcomes to their display strings.
//!
//! Rendering is pure: an [`Outcome`] and a [`Locale`] always produce the same
//! text. Templates:
//!
//! - `CPM: $<amount>` / `Total Cost: $<amount>` (two decimals)
//! - `Impressions: <count>` (no decimals)
//! - `CTR: <percent>%` (two decimals)
//! - the locale's guidance text for messages

use crate::core::{MetricLabel, Outcome, Unit};
use crate::locale::Locale;
use crate::state::MetricCalculator;

/// Format `value` with exactly `digits` decimals.
///
/// Exact binary midpoints round half away from zero (`0.125` -> `"0.13"`,
/// `2.5` -> `"3"`); every other value rounds to the nearest decimal. Negative
/// zero prints without a sign and non-finite values print as `Infinity`,
/// `-Infinity` or `NaN`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };

    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // The product must be exact; 2.675 * 100 rounds onto 267.5 but is below it
    let is_exact_midpoint = scaled.fract().abs() == 0.5 && value.mul_add(scale, -scaled) == 0.0;
    if is_exact_midpoint {
        format!("{:.*}", digits, scaled.round() / scale)
    } else {
        format!("{:.*}", digits, value)
    }
}

/// Amount text for a label, including unit symbols
pub fn format_amount(label: MetricLabel, amount: f64) -> String {
    let unit = label.unit();
    let digits = to_fixed(amount, unit.decimals());
    match unit {
        Unit::Money => format!("${}", digits),
        Unit::Count => digits,
        Unit::Percent => format!("{}%", digits),
    }
}

/// Display string for an outcome
pub fn render(outcome: &Outcome, locale: Locale) -> String {
    match outcome {
        Outcome::Value { label, amount } => {
            format!("{}: {}", locale.label(*label), format_amount(*label, *amount))
        }
        Outcome::Message { text } => locale.guidance(*text).to_string(),
    }
}

/// Result area contents for a calculator state; `None` when nothing is shown
pub fn render_result(calculator: &MetricCalculator, locale: Locale) -> Option<String> {
    calculator.outcome().map(|outcome| render(outcome, locale))
}
