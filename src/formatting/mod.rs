use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Resolve `Auto` against the conventional color environment variables
    pub fn from_env(color: ColorMode) -> Self {
        let mut config = Self::new(color);
        if color != ColorMode::Auto {
            return config;
        }

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub trait OutputFormatter {
    /// A computed value
    fn value(&self, text: &str) -> String;
    /// A guidance message
    fn guidance(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        if config.color.should_use_color() {
            colored::control::set_override(true);
        } else {
            colored::control::set_override(false);
        }

        Self { config }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn value(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn guidance(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn value(&self, text: &str) -> String {
        text.to_string()
    }

    fn guidance(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick the formatter for a configuration
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    match config.color {
        ColorMode::Never => Box::new(PlainFormatter),
        _ => Box::new(ColoredFormatter::new(config)),
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_deserializes_lowercase() {
        let mode: ColorMode = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(mode, ColorMode::Always);
        assert!(serde_json::from_str::<ColorMode>("\"teal\"").is_err());
    }

    #[test]
    fn test_explicit_mode_ignores_environment() {
        let config = FormattingConfig::from_env(ColorMode::Always);
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_plain_formatter_passes_text_through() {
        let formatter = PlainFormatter;
        assert_eq!(formatter.value("CPM: $50.00"), "CPM: $50.00");
        assert_eq!(formatter.guidance("Please"), "Please");
    }

    #[test]
    fn test_never_mode_produces_plain_text() {
        let formatter = formatter_for(FormattingConfig::plain());
        assert_eq!(formatter.value("CTR: 2.00%"), "CTR: 2.00%");
        assert_eq!(formatter.guidance("Please"), "Please");
    }
}
