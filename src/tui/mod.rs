//! Keyboard-driven terminal form for the calculators.
//!
//! The form owns the terminal for its lifetime: raw mode, alternate screen and
//! a redraw on every event. State lives in [`app::FormApp`], which only
//! dispatches [`Action`](crate::state::Action)s to the calculator and renders
//! what comes back.
//!
//! # Usage
//!
//! ```rust,no_run
//! use adops::locale::Locale;
//! use adops::state::MetricCalculator;
//! use adops::tui::{app::FormApp, CalculatorTui};
//!
//! let app = FormApp::new(MetricCalculator::default(), Locale::En);
//! let mut tui = CalculatorTui::new(app)?;
//! tui.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod layout;
pub mod renderer;
pub mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::observability::set_tui_active;
use app::FormApp;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal form manager
pub struct CalculatorTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: FormApp,
}

impl CalculatorTui {
    /// Take over the terminal and prepare the form
    pub fn new(app: FormApp) -> Result<Self> {
        let terminal = take_over(enter_terminal, restore_terminal)?;
        Ok(Self { terminal, app })
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        debug!(
            mode = %self.app.calculator().mode(),
            "closing calculator form"
        );
        self.cleanup()?;
        Ok(())
    }

    pub fn app(&self) -> &FormApp {
        &self.app
    }

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Run terminal setup. On failure the partial setup is undone and the
/// terminal is not marked as owned.
fn take_over<T>(enter: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    match enter() {
        Ok(terminal) => {
            set_tui_active(true);
            Ok(terminal)
        }
        Err(e) => {
            restore();
            Err(e)
        }
    }
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() {
    // Best effort; the setup error is what gets reported
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

impl Drop for CalculatorTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
