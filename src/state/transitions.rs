//! Mode transition table.
//!
//! ```text
//!     Cpm ◄────► Ctr
//! ```
//!
//! Transitions happen only on explicit user selection and carry no guards.
//! Selecting the mode that is already active is not a transition.

use crate::core::Mode;

/// Valid mode transitions.
///
/// Any pair not listed here is ignored by [`MetricCalculator::select_mode`].
///
/// [`MetricCalculator::select_mode`]: super::MetricCalculator::select_mode
pub const MODE_TRANSITIONS: &[(Mode, Mode)] = &[(Mode::Cpm, Mode::Ctr), (Mode::Ctr, Mode::Cpm)];

/// Check if a transition is valid based on the table.
pub fn is_valid_transition(from: Mode, to: Mode) -> bool {
    MODE_TRANSITIONS.contains(&(from, to))
}
