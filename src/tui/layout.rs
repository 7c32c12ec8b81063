//! Responsive layout for the calculator form.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout mode based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Tab bar and key hints (>= 40 cols)
    Full,
    /// Active tab name only, no key hints (< 40 cols)
    Compact,
}

impl LayoutMode {
    pub fn from_terminal_width(width: u16) -> Self {
        match width {
            0..=39 => Self::Compact,
            _ => Self::Full,
        }
    }

    pub fn shows_tab_bar(&self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn shows_hints(&self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Split the form into header, fields, result and footer
pub fn calculate_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title + tabs
            Constraint::Min(3),    // Input fields
            Constraint::Length(2), // Result
            Constraint::Length(1), // Key hints
        ])
        .split(area)
        .to_vec()
}
