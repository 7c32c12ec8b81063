// Export modules for library usage
pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod display;
pub mod errors;
pub mod formatting;
pub mod locale;
pub mod observability;
pub mod state;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{
    CpmField, CpmInputs, CtrField, CtrInputs, Field, Guidance, MetricLabel, Mode, Outcome,
    PresencePolicy,
};

pub use crate::calculator::{compute_cpm, compute_ctr};

pub use crate::display::{render, render_result, to_fixed};

pub use crate::errors::{Error, Result};

pub use crate::locale::Locale;

pub use crate::state::{Action, MetricCalculator, Settings};
