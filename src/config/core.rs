use serde::{Deserialize, Serialize};

use crate::core::PresencePolicy;
use crate::formatting::ColorMode;
use crate::locale::Locale;
use crate::state::Settings;

/// Root configuration structure for adops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdopsConfig {
    /// Calculation behavior
    #[serde(default)]
    pub calculator: Option<CalculatorConfig>,

    /// Output language and styling
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

impl AdopsConfig {
    /// Calculator settings with defaults filled in
    ///
    /// # Examples
    ///
    /// ```
    /// use adops::config::AdopsConfig;
    /// use adops::core::PresencePolicy;
    ///
    /// let settings = AdopsConfig::default().settings();
    /// assert_eq!(settings.presence, PresencePolicy::Falsy);
    /// assert!(!settings.reset_on_mode_switch);
    /// ```
    pub fn settings(&self) -> Settings {
        let calculator = self.calculator.clone().unwrap_or_default();
        Settings {
            presence: calculator.presence.unwrap_or_default(),
            reset_on_mode_switch: calculator.reset_on_mode_switch.unwrap_or(false),
        }
    }

    pub fn locale(&self) -> Locale {
        self.display
            .as_ref()
            .and_then(|d| d.locale)
            .unwrap_or_default()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.display
            .as_ref()
            .and_then(|d| d.color)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalculatorConfig {
    /// Which parsed values count as filled in (`falsy` or `zero_is_value`)
    #[serde(default)]
    pub presence: Option<PresencePolicy>,

    /// Clear the entered mode's form when switching modes
    #[serde(default)]
    pub reset_on_mode_switch: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Label language (`en` or `es`)
    #[serde(default)]
    pub locale: Option<Locale>,

    /// Colored output (`auto`, `always` or `never`)
    #[serde(default)]
    pub color: Option<ColorMode>,
}
