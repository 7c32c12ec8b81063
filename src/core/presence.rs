//! Presence check: turning free-text field contents into optional numbers.
//!
//! Fields are parsed with decimal-prefix semantics: leading whitespace is
//! skipped, the longest numeric prefix is read and anything after it is
//! ignored, so `"12abc"` reads as `12`. Text without a numeric prefix is
//! absent. Whether a parsed zero counts as present is decided by
//! [`PresencePolicy`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// Rule deciding which parsed numbers count as "filled in".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PresencePolicy {
    /// Zero and NaN are treated as absent, exactly like blank input
    #[default]
    Falsy,
    /// Zero is a real value; only NaN is absent
    #[value(alias = "zero_is_value")]
    ZeroIsValue,
}

impl PresencePolicy {
    /// Filter a parsed number through the policy
    pub fn admit(self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        match self {
            PresencePolicy::Falsy if value == 0.0 => None,
            _ => Some(value),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresencePolicy::Falsy => "falsy",
            PresencePolicy::ZeroIsValue => "zero_is_value",
        }
    }
}

/// Parse the longest decimal prefix of `text`.
///
/// Returns `None` when no numeric prefix exists. A prefix the float parser
/// cannot represent overflows to infinity rather than failing.
pub fn parse_decimal_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let prefix = DECIMAL_PREFIX.find(trimmed)?.as_str();
    prefix.parse::<f64>().ok()
}

/// Parse a field and apply the presence policy in one step
pub fn read_field(text: &str, policy: PresencePolicy) -> Option<f64> {
    parse_decimal_prefix(text).and_then(|value| policy.admit(value))
}
