//! Configuration builders for CLI commands
//!
//! Merges the loaded `.adops.toml` with command line overrides into the
//! typed configuration every command handler receives. Flags win over file
//! values.

use crate::cli::args::OutputFormat;
use crate::config::AdopsConfig;
use crate::core::PresencePolicy;
use crate::formatting::FormattingConfig;
use crate::locale::Locale;
use crate::state::Settings;

/// Values taken from the command line that can override the config file
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub format: OutputFormat,
    pub locale: Option<Locale>,
    pub presence: Option<PresencePolicy>,
    pub reset_on_mode_switch: bool,
    pub plain: bool,
}

/// Fully resolved configuration for one command run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub settings: Settings,
    pub locale: Locale,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

/// Pure function to merge file config and overrides
pub fn build_run_config(overrides: &CliOverrides, file: &AdopsConfig) -> RunConfig {
    let file_settings = file.settings();
    let settings = Settings {
        presence: overrides.presence.unwrap_or(file_settings.presence),
        reset_on_mode_switch: overrides.reset_on_mode_switch
            || file_settings.reset_on_mode_switch,
    };

    RunConfig {
        settings,
        locale: overrides.locale.unwrap_or_else(|| file.locale()),
        format: overrides.format,
        formatting: create_formatting_config(overrides.plain, file),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool, file: &AdopsConfig) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env(file.color_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalculatorConfig, DisplayConfig};
    use crate::formatting::ColorMode;

    fn file_config() -> AdopsConfig {
        AdopsConfig {
            calculator: Some(CalculatorConfig {
                presence: Some(PresencePolicy::ZeroIsValue),
                reset_on_mode_switch: Some(true),
            }),
            display: Some(DisplayConfig {
                locale: Some(Locale::Es),
                color: Some(ColorMode::Always),
            }),
        }
    }

    #[test]
    fn test_file_values_used_without_overrides() {
        let config = build_run_config(&CliOverrides::default(), &file_config());
        assert_eq!(config.settings.presence, PresencePolicy::ZeroIsValue);
        assert!(config.settings.reset_on_mode_switch);
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.formatting.color, ColorMode::Always);
    }

    #[test]
    fn test_overrides_win() {
        let overrides = CliOverrides {
            format: OutputFormat::Json,
            locale: Some(Locale::En),
            presence: Some(PresencePolicy::Falsy),
            reset_on_mode_switch: false,
            plain: true,
        };
        let config = build_run_config(&overrides, &file_config());
        assert_eq!(config.settings.presence, PresencePolicy::Falsy);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.formatting, FormattingConfig::plain());
    }

    #[test]
    fn test_defaults_with_empty_file() {
        let config = build_run_config(&CliOverrides::default(), &AdopsConfig::default());
        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.format, OutputFormat::Terminal);
    }
}
