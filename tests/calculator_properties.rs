//! Property-based tests for the calculators
//!
//! These tests verify invariants that should hold for all inputs:
//! - Each CPM rule computes its formula and label
//! - Fewer than two present CPM values always yields guidance
//! - CTR is clicks over impressions as a percentage
//! - Rendering always uses the fixed decimal templates
//! - Reset never fails and always clears the active form

mod common;

use adops::core::{
    parse_decimal_prefix, CpmField, CtrField, Field, Guidance, MetricLabel, Mode, Outcome,
};
use adops::display::render_result;
use adops::locale::Locale;
use adops::state::{Action, MetricCalculator};
use common::{cpm, ctr};
use proptest::prelude::*;

/// Positive amounts as field text
fn amount() -> impl Strategy<Value = f64> {
    0.01f64..1_000_000.0
}

/// Text that is blank, zero or has no numeric prefix
fn absent_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("0".to_string()),
        Just("0.0".to_string()),
        Just("   ".to_string()),
        "[a-zA-Z]{1,8}".prop_filter("not a number word", |s| s != "Infinity"),
    ]
}

fn text(value: f64) -> String {
    value.to_string()
}

fn decimals_after_point(rendered: &str) -> Option<usize> {
    let digits = rendered.trim_end_matches('%');
    digits.split_once('.').map(|(_, frac)| frac.len())
}

proptest! {
    #[test]
    fn prop_cpm_from_cost_and_impressions(cost in amount(), impressions in amount()) {
        let calc = cpm(&text(cost), "", &text(impressions));
        let expected = (cost / impressions) * 1000.0;

        prop_assert_eq!(calc.outcome(), Some(&Outcome::value(MetricLabel::Cpm, expected)));

        let shown = render_result(&calc, Locale::En).unwrap();
        prop_assert!(shown.starts_with("CPM: $"));
        prop_assert_eq!(decimals_after_point(&shown), Some(2));
    }

    #[test]
    fn prop_total_cost_from_rate_and_impressions(rate in amount(), impressions in amount()) {
        let calc = cpm("", &text(rate), &text(impressions));
        let expected = (rate * impressions) / 1000.0;

        prop_assert_eq!(
            calc.outcome(),
            Some(&Outcome::value(MetricLabel::TotalCost, expected))
        );
    }

    #[test]
    fn prop_impressions_from_cost_and_rate(cost in amount(), rate in amount()) {
        let calc = cpm(&text(cost), &text(rate), "");
        let expected = ((cost / rate) * 1000.0).round();

        prop_assert_eq!(
            calc.outcome(),
            Some(&Outcome::value(MetricLabel::Impressions, expected))
        );

        let shown = render_result(&calc, Locale::En).unwrap();
        prop_assert!(shown.starts_with("Impressions: "));
        prop_assert!(!shown.contains('.'));
    }

    #[test]
    fn prop_one_present_cpm_value_yields_guidance(
        value in amount(),
        slot in 0usize..3,
        blank_a in absent_text(),
        blank_b in absent_text(),
    ) {
        let value = text(value);
        let calc = match slot {
            0 => cpm(&value, &blank_a, &blank_b),
            1 => cpm(&blank_a, &value, &blank_b),
            _ => cpm(&blank_a, &blank_b, &value),
        };

        prop_assert_eq!(calc.outcome(), Some(&Outcome::message(Guidance::NeedTwoCpmValues)));
    }

    #[test]
    fn prop_ctr_formula(impressions in amount(), clicks in amount()) {
        let calc = ctr(&text(impressions), &text(clicks));
        let expected = (clicks / impressions) * 100.0;

        prop_assert_eq!(calc.outcome(), Some(&Outcome::value(MetricLabel::Ctr, expected)));

        let shown = render_result(&calc, Locale::En).unwrap();
        prop_assert!(shown.starts_with("CTR: "));
        prop_assert!(shown.ends_with('%'));
        prop_assert_eq!(decimals_after_point(&shown), Some(2));
    }

    #[test]
    fn prop_missing_ctr_field_yields_guidance(value in amount(), blank in absent_text(), clicks_missing in any::<bool>()) {
        let value = text(value);
        let calc = if clicks_missing {
            ctr(&value, &blank)
        } else {
            ctr(&blank, &value)
        };

        prop_assert_eq!(
            calc.outcome(),
            Some(&Outcome::message(Guidance::NeedImpressionsAndClicks))
        );
    }

    #[test]
    fn prop_reset_clears_active_mode(
        texts in prop::collection::vec(".{0,6}", 5),
        use_ctr in any::<bool>(),
        calculate_first in any::<bool>(),
    ) {
        let mut calc = MetricCalculator::default()
            .apply(Action::edit(Field::Cpm(CpmField::TotalCost), texts[0].clone()))
            .apply(Action::edit(Field::Cpm(CpmField::CpmRate), texts[1].clone()))
            .apply(Action::edit(Field::Cpm(CpmField::Impressions), texts[2].clone()))
            .apply(Action::edit(Field::Ctr(CtrField::Impressions), texts[3].clone()))
            .apply(Action::edit(Field::Ctr(CtrField::Clicks), texts[4].clone()));
        if use_ctr {
            calc = calc.apply(Action::SelectMode(Mode::Ctr));
        }
        if calculate_first {
            calc = calc.apply(Action::Calculate);
        }

        let reset = calc.apply(Action::Reset);

        prop_assert_eq!(reset.outcome(), None);
        prop_assert!(reset.active_fields().iter().all(|f| reset.field_text(*f).is_empty()));
        if use_ctr {
            prop_assert_eq!(reset.cpm_text(), calc.cpm_text());
        } else {
            prop_assert_eq!(reset.ctr_text(), calc.ctr_text());
        }
    }

    #[test]
    fn prop_decimal_prefix_ignores_trailing_text(value in amount(), suffix in "[a-z ]{0,6}") {
        let parsed = parse_decimal_prefix(&format!("{}{}", text(value), suffix));
        prop_assert_eq!(parsed, Some(value));
    }
}
