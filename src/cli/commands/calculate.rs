//! One-shot `cpm` and `ctr` command handlers
//!
//! The handlers drive the same state machine as the interactive form: each
//! provided value becomes an `Edit` action, followed by `Calculate`.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::cli::config_builder::RunConfig;
use crate::core::{CpmField, CpmInputs, CtrField, CtrInputs, Field, Mode, Outcome};
use crate::display::render;
use crate::formatting::formatter_for;
use crate::state::{Action, MetricCalculator, Settings};

/// JSON shape of a calculation
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub mode: Mode,
    pub inputs: ReportInputs,
    pub outcome: Outcome,
    pub display: String,
}

/// Parsed inputs of whichever calculator ran
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReportInputs {
    Cpm(CpmInputs),
    Ctr(CtrInputs),
}

/// Handle the `cpm` command
pub fn handle_cpm_command(
    config: &RunConfig,
    total_cost: Option<String>,
    cpm_rate: Option<String>,
    impressions: Option<String>,
) -> Result<()> {
    let entries = collect_entries([
        (Field::Cpm(CpmField::TotalCost), total_cost),
        (Field::Cpm(CpmField::CpmRate), cpm_rate),
        (Field::Cpm(CpmField::Impressions), impressions),
    ]);
    let calculator = calculate_from_entries(config.settings, Mode::Cpm, entries);
    print_report(config, &calculator)
}

/// Handle the `ctr` command
pub fn handle_ctr_command(
    config: &RunConfig,
    impressions: Option<String>,
    clicks: Option<String>,
) -> Result<()> {
    let entries = collect_entries([
        (Field::Ctr(CtrField::Impressions), impressions),
        (Field::Ctr(CtrField::Clicks), clicks),
    ]);
    let calculator = calculate_from_entries(config.settings, Mode::Ctr, entries);
    print_report(config, &calculator)
}

// Pure function to drop flags that were not given
fn collect_entries<const N: usize>(fields: [(Field, Option<String>); N]) -> Vec<(Field, String)> {
    fields
        .into_iter()
        .filter_map(|(field, text)| text.map(|t| (field, t)))
        .collect()
}

/// Run a calculation by dispatching edit actions and a final calculate
pub fn calculate_from_entries(
    settings: Settings,
    mode: Mode,
    entries: Vec<(Field, String)>,
) -> MetricCalculator {
    let start = MetricCalculator::new(settings).with_mode(mode);
    entries
        .into_iter()
        .fold(start, |calculator, (field, text)| {
            calculator.apply(Action::edit(field, text))
        })
        .apply(Action::Calculate)
}

/// Render the result of a finished calculation for the chosen output format
pub fn render_report(config: &RunConfig, calculator: &MetricCalculator) -> Result<String> {
    let outcome = calculator
        .outcome()
        .copied()
        .unwrap_or_else(|| calculator.compute());
    let display = render(&outcome, config.locale);

    match config.format {
        OutputFormat::Json => {
            let policy = calculator.settings().presence;
            let inputs = match calculator.mode() {
                Mode::Cpm => ReportInputs::Cpm(calculator.cpm_text().inputs(policy)),
                Mode::Ctr => ReportInputs::Ctr(calculator.ctr_text().inputs(policy)),
            };
            let report = CalculationReport {
                mode: calculator.mode(),
                inputs,
                outcome,
                display,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize calculation report")
        }
        OutputFormat::Terminal => {
            let formatter = formatter_for(config.formatting);
            Ok(if outcome.is_value() {
                formatter.value(&display)
            } else {
                formatter.guidance(&display)
            })
        }
    }
}

fn print_report(config: &RunConfig, calculator: &MetricCalculator) -> Result<()> {
    debug!(mode = %calculator.mode(), outcome = ?calculator.outcome(), "calculation finished");
    let output = render_report(config, calculator)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::FormattingConfig;
    use crate::locale::Locale;

    fn run_config(format: OutputFormat) -> RunConfig {
        RunConfig {
            settings: Settings::default(),
            locale: Locale::En,
            format,
            formatting: FormattingConfig::plain(),
        }
    }

    #[test]
    fn test_collect_entries_skips_missing_flags() {
        let entries = collect_entries([
            (Field::Cpm(CpmField::TotalCost), Some("500".to_string())),
            (Field::Cpm(CpmField::CpmRate), None),
        ]);
        assert_eq!(entries, vec![(Field::Cpm(CpmField::TotalCost), "500".to_string())]);
    }

    #[test]
    fn test_terminal_report() {
        let calculator = calculate_from_entries(
            Settings::default(),
            Mode::Cpm,
            vec![
                (Field::Cpm(CpmField::TotalCost), "300".into()),
                (Field::Cpm(CpmField::CpmRate), "15".into()),
            ],
        );
        let output = render_report(&run_config(OutputFormat::Terminal), &calculator).unwrap();
        assert_eq!(output, "Impressions: 20000");
    }

    #[test]
    fn test_json_report() {
        let calculator = calculate_from_entries(
            Settings::default(),
            Mode::Ctr,
            vec![
                (Field::Ctr(CtrField::Impressions), "2000".into()),
                (Field::Ctr(CtrField::Clicks), "40".into()),
            ],
        );
        let output = render_report(&run_config(OutputFormat::Json), &calculator).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["mode"], "ctr");
        assert_eq!(json["inputs"]["clicks"], 40.0);
        assert_eq!(json["outcome"]["kind"], "value");
        assert_eq!(json["outcome"]["label"], "CTR");
        assert_eq!(json["display"], "CTR: 2.00%");
    }

    #[test]
    fn test_json_report_for_guidance() {
        let calculator = calculate_from_entries(
            Settings::default(),
            Mode::Cpm,
            vec![(Field::Cpm(CpmField::TotalCost), "100".into())],
        );
        let output = render_report(&run_config(OutputFormat::Json), &calculator).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["outcome"]["kind"], "message");
        assert!(json["inputs"]["cpm_rate"].is_null());
        assert_eq!(
            json["display"],
            "Please enter at least two values to calculate."
        );
    }
}
