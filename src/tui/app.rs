//! Form state for the terminal calculator.
//!
//! Key handling is split in two: [`determine_command`] is a pure mapping from
//! a key event to a [`Command`], and [`FormApp::execute`] applies it. All
//! calculator changes go through [`MetricCalculator::apply`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::core::Field;
use crate::locale::Locale;
use crate::state::{Action, MetricCalculator};

use super::renderer;

/// What a key press asks the form to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward a calculator action unchanged
    Dispatch(Action),
    /// Append a character to the focused field
    Insert(char),
    /// Delete the last character of the focused field
    DeleteBack,
    FocusNext,
    FocusPrev,
    Quit,
}

/// Map a key to a command. Keys without a meaning return `None`.
pub fn determine_command(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('r') if ctrl => Some(Command::Dispatch(Action::Reset)),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Command::Insert(c)),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::Dispatch(Action::ToggleMode)),
        KeyCode::Enter => Some(Command::Dispatch(Action::Calculate)),
        KeyCode::Backspace => Some(Command::DeleteBack),
        KeyCode::Down => Some(Command::FocusNext),
        KeyCode::Up => Some(Command::FocusPrev),
        _ => None,
    }
}

/// Application state of the terminal form
pub struct FormApp {
    calculator: MetricCalculator,
    /// Index into the active mode's fields
    focus: usize,
    locale: Locale,
    should_quit: bool,
}

impl FormApp {
    pub fn new(calculator: MetricCalculator, locale: Locale) -> Self {
        Self {
            calculator,
            focus: 0,
            locale,
            should_quit: false,
        }
    }

    pub fn calculator(&self) -> &MetricCalculator {
        &self.calculator
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The field receiving typed characters
    pub fn focused_field(&self) -> Field {
        let fields = self.calculator.active_fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Handle a key press. Returns true when the form should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(command) = determine_command(key) {
            self.execute(command);
        }
        self.should_quit
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Dispatch(action) => self.dispatch(action),
            Command::Insert(c) => {
                let field = self.focused_field();
                let mut text = self.calculator.field_text(field).to_string();
                text.push(c);
                self.dispatch(Action::edit(field, text));
            }
            Command::DeleteBack => {
                let field = self.focused_field();
                let mut text = self.calculator.field_text(field).to_string();
                if text.pop().is_some() {
                    self.dispatch(Action::edit(field, text));
                }
            }
            Command::FocusNext => {
                let count = self.calculator.active_fields().len();
                self.focus = (self.focus + 1) % count;
            }
            Command::FocusPrev => {
                let count = self.calculator.active_fields().len();
                self.focus = (self.focus + count - 1) % count;
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let previous_mode = self.calculator.mode();
        self.calculator = self.calculator.apply(action);
        if self.calculator.mode() != previous_mode {
            self.focus = 0;
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        renderer::render_form(frame, self);
    }
}
