//! Color theme for the calculator form.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the form
pub struct Theme {
    /// Accent for the active tab and focused field
    pub primary: Color,
    /// Computed values
    pub success: Color,
    /// Guidance messages
    pub warning: Color,
    /// Placeholders, hints and inactive tabs
    pub muted: Color,
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn tab_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn active_tab_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a field label (based on focus)
    pub fn label_style(&self, is_focused: bool) -> Style {
        if is_focused {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn input_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn value_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn guidance_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default_theme();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(theme.muted, Color::DarkGray);
    }

    #[test]
    fn test_result_styles_are_distinct() {
        let theme = Theme::default();
        assert_ne!(theme.value_style().fg, theme.guidance_style().fg);
        assert_ne!(theme.label_style(true), theme.label_style(false));
    }
}
