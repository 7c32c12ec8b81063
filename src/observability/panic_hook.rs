//! Panic hook that hands the terminal back before reporting.
//!
//! If the calculator form is running, the terminal is in raw mode on the
//! alternate screen. The hook leaves both before delegating to the previously
//! installed hook, so the panic message lands on the normal screen.

use std::io;

use super::{is_tui_active, set_tui_active};

/// Install the panic hook.
///
/// Call once, early in `main`, before the terminal form can be opened.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        exit_tui_mode();
        previous(info);
    }));
}

fn exit_tui_mode() {
    if !is_tui_active() {
        return;
    }
    // Mark inactive first so logging works again
    set_tui_active(false);

    // Ignore errors - we're already panicking
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::execute!(io::stdout(), crossterm::cursor::Show);
}

