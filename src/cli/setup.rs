//! Setup and initialization functions for CLI
//!
//! This module contains functions for initializing the runtime environment:
//! logging and configuration resolution.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, load_config_file, AdopsConfig};
use crate::observability::is_tui_active;

/// Default log filter for a `-v` count
pub fn log_level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Output goes to stderr,
/// and is dropped while the terminal form owns the screen.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level_for_verbosity(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(log_writer)
        .try_init();

    if let Err(e) = result {
        // Already configured - this is fine, just ignore
        eprintln!("Note: Logging already configured: {}", e);
    }
}

fn log_writer() -> Box<dyn io::Write> {
    if is_tui_active() {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

/// Load the explicit config file, or discover one from the current directory
pub fn resolve_config(explicit: Option<&Path>) -> Result<AdopsConfig> {
    match explicit {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_level_for_verbosity() {
        assert_eq!(log_level_for_verbosity(0), "warn");
        assert_eq!(log_level_for_verbosity(1), "debug");
        assert_eq!(log_level_for_verbosity(2), "trace");
        assert_eq!(log_level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_resolve_explicit_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[display]\nlocale = \"es\"\n").unwrap();

        let config = resolve_config(Some(&path)).unwrap();
        assert_eq!(config.locale(), crate::locale::Locale::Es);
    }

    #[test]
    fn test_resolve_explicit_config_failure_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[display\n").unwrap();

        let err = resolve_config(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }
}
