//! Core data model for the metric calculator.
//!
//! Everything in this module is plain data: the calculator modes, the
//! identifiers of each form field, the sparse numeric inputs each calculator
//! consumes, and the tagged [`Outcome`] they produce. Parsing free text into
//! numbers lives in [`presence`].

pub mod presence;

use serde::{Deserialize, Serialize};

pub use presence::{parse_decimal_prefix, read_field, PresencePolicy};

/// Which calculator is active.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Cost per mille: total cost, CPM rate and impressions.
    #[default]
    Cpm,
    /// Click-through rate: impressions and clicks.
    Ctr,
}

impl Mode {
    /// All modes in tab order
    pub fn all() -> &'static [Mode] {
        &[Mode::Cpm, Mode::Ctr]
    }

    /// The mode a toggle switches to
    pub fn other(self) -> Mode {
        match self {
            Mode::Cpm => Mode::Ctr,
            Mode::Ctr => Mode::Cpm,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cpm => "CPM",
            Mode::Ctr => "CTR",
        }
    }

    /// Fields shown for this mode, in form order
    pub fn fields(self) -> Vec<Field> {
        match self {
            Mode::Cpm => CpmField::ALL.iter().copied().map(Field::Cpm).collect(),
            Mode::Ctr => CtrField::ALL.iter().copied().map(Field::Ctr).collect(),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input fields of the CPM calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpmField {
    TotalCost,
    CpmRate,
    Impressions,
}

impl CpmField {
    pub const ALL: [CpmField; 3] = [CpmField::TotalCost, CpmField::CpmRate, CpmField::Impressions];
}

/// Input fields of the CTR calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CtrField {
    Impressions,
    Clicks,
}

impl CtrField {
    pub const ALL: [CtrField; 2] = [CtrField::Impressions, CtrField::Clicks];
}

/// A form field of either calculator.
///
/// The two `Impressions` variants are distinct fields: each mode keeps its own
/// text, so typing impressions in the CTR form leaves the CPM form untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Cpm(CpmField),
    Ctr(CtrField),
}

impl Field {
    /// The mode this field belongs to
    pub fn mode(&self) -> Mode {
        match self {
            Field::Cpm(_) => Mode::Cpm,
            Field::Ctr(_) => Mode::Ctr,
        }
    }
}

/// Numeric inputs of the CPM calculator after the presence check.
///
/// `None` means the field is absent: blank, unparseable or (under the default
/// policy) zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CpmInputs {
    pub total_cost: Option<f64>,
    pub cpm_rate: Option<f64>,
    pub impressions: Option<f64>,
}

impl CpmInputs {
    /// Build inputs from raw field text
    pub fn from_text(
        total_cost: &str,
        cpm_rate: &str,
        impressions: &str,
        policy: PresencePolicy,
    ) -> Self {
        Self {
            total_cost: read_field(total_cost, policy),
            cpm_rate: read_field(cpm_rate, policy),
            impressions: read_field(impressions, policy),
        }
    }
}

/// Numeric inputs of the CTR calculator after the presence check.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CtrInputs {
    pub impressions: Option<f64>,
    pub clicks: Option<f64>,
}

impl CtrInputs {
    pub fn from_text(impressions: &str, clicks: &str, policy: PresencePolicy) -> Self {
        Self {
            impressions: read_field(impressions, policy),
            clicks: read_field(clicks, policy),
        }
    }
}

/// How an amount is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Dollar amount, two decimals
    Money,
    /// Whole count, no decimals
    Count,
    /// Percentage, two decimals
    Percent,
}

impl Unit {
    /// Decimal places used when formatting
    pub fn decimals(&self) -> usize {
        match self {
            Unit::Money | Unit::Percent => 2,
            Unit::Count => 0,
        }
    }
}

/// The quantity a computed value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricLabel {
    #[serde(rename = "CPM")]
    Cpm,
    #[serde(rename = "Total Cost")]
    TotalCost,
    #[serde(rename = "Impressions")]
    Impressions,
    #[serde(rename = "CTR")]
    Ctr,
}

impl MetricLabel {
    pub fn unit(&self) -> Unit {
        match self {
            MetricLabel::Cpm | MetricLabel::TotalCost => Unit::Money,
            MetricLabel::Impressions => Unit::Count,
            MetricLabel::Ctr => Unit::Percent,
        }
    }
}

/// Instruction shown when a calculator lacks usable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guidance {
    /// Fewer than two CPM fields are present
    NeedTwoCpmValues,
    /// Impressions or clicks is missing
    NeedImpressionsAndClicks,
}

/// Result of a calculation: a labeled value or a guidance message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    Value { label: MetricLabel, amount: f64 },
    Message { text: Guidance },
}

impl Outcome {
    pub fn value(label: MetricLabel, amount: f64) -> Self {
        Outcome::Value { label, amount }
    }

    pub fn message(text: Guidance) -> Self {
        Outcome::Message { text }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value { .. })
    }

    /// Computed amount, if this is a value
    pub fn amount(&self) -> Option<f64> {
        match self {
            Outcome::Value { amount, .. } => Some(*amount),
            Outcome::Message { .. } => None,
        }
    }

    /// Label of the computed value, if this is a value
    pub fn label(&self) -> Option<MetricLabel> {
        match self {
            Outcome::Value { label, .. } => Some(*label),
            Outcome::Message { .. } => None,
        }
    }
}
