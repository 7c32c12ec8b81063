//! `tui` command handler

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::config_builder::RunConfig;
use crate::core::Mode;
use crate::state::MetricCalculator;
use crate::tui::app::FormApp;
use crate::tui::CalculatorTui;

/// Handle the `tui` command
pub fn handle_tui_command(config: &RunConfig, mode: Mode) -> Result<()> {
    info!(%mode, locale = ?config.locale, "opening calculator form");
    let calculator = MetricCalculator::new(config.settings).with_mode(mode);
    let app = FormApp::new(calculator, config.locale);

    let mut tui = CalculatorTui::new(app).context("Failed to initialize terminal")?;
    tui.run()
}
