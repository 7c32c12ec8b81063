//! CLI module for adops
//!
//! This module provides the command-line interface for adops, including:
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Configuration building (`config_builder`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod config_builder;
pub mod setup;

use anyhow::Result;
use tracing::debug;

// Re-export commonly used types for convenience
pub use args::{Cli, Commands, OutputFormat};
pub use commands::{handle_cpm_command, handle_ctr_command, handle_tui_command};
pub use config_builder::{build_run_config, CliOverrides, RunConfig};
pub use setup::{init_logging, log_level_for_verbosity, resolve_config};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        format,
        locale,
        presence,
        config,
        plain,
        verbosity: _,
    } = cli;

    let resolve_run_config = |reset_on_mode_switch: bool| -> Result<RunConfig> {
        let file_config = resolve_config(config.as_deref())?;
        let overrides = CliOverrides {
            format,
            locale,
            presence,
            reset_on_mode_switch,
            plain,
        };
        let run_config = build_run_config(&overrides, &file_config);
        debug!(?run_config, "resolved configuration");
        Ok(run_config)
    };

    match command {
        Commands::Cpm {
            total_cost,
            cpm_rate,
            impressions,
        } => handle_cpm_command(&resolve_run_config(false)?, total_cost, cpm_rate, impressions),
        Commands::Ctr {
            impressions,
            clicks,
        } => handle_ctr_command(&resolve_run_config(false)?, impressions, clicks),
        Commands::Tui {
            mode,
            reset_on_mode_switch,
        } => handle_tui_command(&resolve_run_config(reset_on_mode_switch)?, mode),
        Commands::Init { force } => {
            crate::commands::init::init_config(force)?;
            Ok(())
        }
    }
}
