use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::{Mode, PresencePolicy};
use crate::locale::Locale;

#[derive(Parser, Debug)]
#[command(name = "adops")]
#[command(about = "CPM and CTR calculator for ad operations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal", global = true)]
    pub format: OutputFormat,

    /// Label and message language (overrides config)
    #[arg(long, value_enum, global = true)]
    pub locale: Option<Locale>,

    /// What counts as a filled-in value (overrides config)
    #[arg(long, value_enum, global = true)]
    pub presence: Option<PresencePolicy>,

    /// Configuration file (skips discovery of .adops.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Plain output without colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Show config discovery and dispatch
    /// -vv: Trace every state transition
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the missing one of total cost, CPM rate and impressions
    Cpm {
        /// Total spend
        #[arg(long = "total-cost", visible_alias = "cost", allow_hyphen_values = true)]
        total_cost: Option<String>,

        /// Cost per thousand impressions
        #[arg(long = "cpm-rate", visible_alias = "rate", allow_hyphen_values = true)]
        cpm_rate: Option<String>,

        /// Number of impressions
        #[arg(long, allow_hyphen_values = true)]
        impressions: Option<String>,
    },

    /// Compute click-through rate from impressions and clicks
    Ctr {
        /// Number of impressions
        #[arg(long, allow_hyphen_values = true)]
        impressions: Option<String>,

        /// Number of clicks
        #[arg(long, allow_hyphen_values = true)]
        clicks: Option<String>,
    },

    /// Open the interactive calculator form
    Tui {
        /// Calculator shown first
        #[arg(long, value_enum, default_value = "cpm")]
        mode: Mode,

        /// Clear the form of the mode being entered on every mode switch
        #[arg(long = "reset-on-mode-switch")]
        reset_on_mode_switch: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
