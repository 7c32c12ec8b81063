//! Terminal ownership tracking and crash handling.
//!
//! While the calculator form owns the terminal (raw mode, alternate screen),
//! log output would corrupt the display and a panic message would be lost.
//! [`set_tui_active`] records ownership; the logging writer and the panic hook
//! both consult it.
//!
//! ```ignore
//! use adops::observability::install_panic_hook;
//!
//! fn main() {
//!     install_panic_hook();
//!     // ... rest of application
//! }
//! ```

pub mod panic_hook;

use std::sync::atomic::{AtomicBool, Ordering};

pub use panic_hook::install_panic_hook;

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Record whether the terminal form currently owns the terminal
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}
