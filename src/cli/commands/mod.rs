//! Command handlers for CLI subcommands
//!
//! This module contains the implementations for each CLI subcommand,
//! providing a clean separation between argument parsing and command execution.

mod calculate;
mod interactive;

pub use calculate::{
    calculate_from_entries, handle_cpm_command, handle_ctr_command, render_report,
    CalculationReport, ReportInputs,
};
pub use interactive::handle_tui_command;
