// Test utility module for adops integration tests
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use adops::core::{CpmField, CtrField, Field, Mode};
use adops::state::{Action, MetricCalculator, Settings};

/// Build a calculator in `mode` with the given field texts, then calculate
pub fn calculate(settings: Settings, mode: Mode, entries: &[(Field, &str)]) -> MetricCalculator {
    entries
        .iter()
        .fold(
            MetricCalculator::new(settings).with_mode(mode),
            |calc, (field, text)| calc.apply(Action::edit(*field, *text)),
        )
        .apply(Action::Calculate)
}

/// CPM calculation with default settings; empty strings leave a field blank
pub fn cpm(total_cost: &str, cpm_rate: &str, impressions: &str) -> MetricCalculator {
    calculate(
        Settings::default(),
        Mode::Cpm,
        &[
            (Field::Cpm(CpmField::TotalCost), total_cost),
            (Field::Cpm(CpmField::CpmRate), cpm_rate),
            (Field::Cpm(CpmField::Impressions), impressions),
        ],
    )
}

/// CTR calculation with default settings
pub fn ctr(impressions: &str, clicks: &str) -> MetricCalculator {
    calculate(
        Settings::default(),
        Mode::Ctr,
        &[
            (Field::Ctr(CtrField::Impressions), impressions),
            (Field::Ctr(CtrField::Clicks), clicks),
        ],
    )
}

/// The adops binary, run in `dir` with color and logging environment cleared
pub fn adops_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_adops"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}
