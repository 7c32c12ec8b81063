//! CPM calculator: derive the missing one of total cost, CPM rate and
//! impressions from the other two.
//!
//! Rules are tried in a fixed order and the first whose inputs are present
//! wins:
//!
//! 1. total cost + impressions -> CPM
//! 2. CPM rate + impressions -> total cost
//! 3. total cost + CPM rate -> impressions (rounded)
//!
//! A rule whose divisor is zero does not match.

use super::{ratio, MILLE};
use crate::core::{CpmInputs, Guidance, MetricLabel, Outcome};

/// Compute the missing CPM quantity
pub fn compute_cpm(inputs: &CpmInputs) -> Outcome {
    cpm_from_cost(inputs)
        .or_else(|| total_cost_from_rate(inputs))
        .or_else(|| impressions_from_cost(inputs))
        .unwrap_or(Outcome::message(Guidance::NeedTwoCpmValues))
}

fn cpm_from_cost(inputs: &CpmInputs) -> Option<Outcome> {
    let cpm = ratio(inputs.total_cost?, inputs.impressions?)? * MILLE;
    Some(Outcome::value(MetricLabel::Cpm, cpm))
}

fn total_cost_from_rate(inputs: &CpmInputs) -> Option<Outcome> {
    let cost = (inputs.cpm_rate? * inputs.impressions?) / MILLE;
    Some(Outcome::value(MetricLabel::TotalCost, cost))
}

fn impressions_from_cost(inputs: &CpmInputs) -> Option<Outcome> {
    let impressions = ratio(inputs.total_cost?, inputs.cpm_rate?)? * MILLE;
    Some(Outcome::value(MetricLabel::Impressions, impressions.round()))
}
