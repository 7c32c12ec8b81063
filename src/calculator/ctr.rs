//! CTR calculator: clicks over impressions, as a percentage.

use super::{ratio, PERCENT};
use crate::core::{CtrInputs, Guidance, MetricLabel, Outcome};

/// Compute click-through rate
pub fn compute_ctr(inputs: &CtrInputs) -> Outcome {
    ctr_from_clicks(inputs).unwrap_or(Outcome::message(Guidance::NeedImpressionsAndClicks))
}

fn ctr_from_clicks(inputs: &CtrInputs) -> Option<Outcome> {
    let ctr = ratio(inputs.clicks?, inputs.impressions?)? * PERCENT;
    Some(Outcome::value(MetricLabel::Ctr, ctr))
}
