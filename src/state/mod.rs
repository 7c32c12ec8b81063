//! Calculator state and the pure transitions between states.
//!
//! [`MetricCalculator`] is an immutable value: the active mode, the raw text of
//! every field and the outcome currently shown. User events are modeled as
//! [`Action`]s; [`MetricCalculator::apply`] returns the next state and never
//! fails. Front ends (the CLI and the terminal form) only dispatch actions and
//! render whatever state comes back.
//!
//! # Example
//!
//! ```
//! use adops::core::{CpmField, Field};
//! use adops::display::render_result;
//! use adops::locale::Locale;
//! use adops::state::{Action, MetricCalculator};
//!
//! let calculator = MetricCalculator::default()
//!     .apply(Action::edit(Field::Cpm(CpmField::TotalCost), "500"))
//!     .apply(Action::edit(Field::Cpm(CpmField::Impressions), "10000"))
//!     .apply(Action::Calculate);
//!
//! assert_eq!(
//!     render_result(&calculator, Locale::En).as_deref(),
//!     Some("CPM: $50.00")
//! );
//! ```

pub mod transitions;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculator::{compute_cpm, compute_ctr};
use crate::core::{CpmField, CpmInputs, CtrField, CtrInputs, Field, Mode, Outcome, PresencePolicy};

pub use transitions::{is_valid_transition, MODE_TRANSITIONS};

/// Behavior switches for the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// What counts as a filled-in field
    #[serde(default)]
    pub presence: PresencePolicy,
    /// Clear the outcome and the entered mode's fields on every mode change
    #[serde(default)]
    pub reset_on_mode_switch: bool,
}

/// Raw text of the CPM form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CpmText {
    pub total_cost: String,
    pub cpm_rate: String,
    pub impressions: String,
}

impl CpmText {
    pub fn get(&self, field: CpmField) -> &str {
        match field {
            CpmField::TotalCost => &self.total_cost,
            CpmField::CpmRate => &self.cpm_rate,
            CpmField::Impressions => &self.impressions,
        }
    }

    fn slot(&mut self, field: CpmField) -> &mut String {
        match field {
            CpmField::TotalCost => &mut self.total_cost,
            CpmField::CpmRate => &mut self.cpm_rate,
            CpmField::Impressions => &mut self.impressions,
        }
    }

    pub fn inputs(&self, policy: PresencePolicy) -> CpmInputs {
        CpmInputs::from_text(&self.total_cost, &self.cpm_rate, &self.impressions, policy)
    }

    pub fn is_empty(&self) -> bool {
        CpmField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Raw text of the CTR form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CtrText {
    pub impressions: String,
    pub clicks: String,
}

impl CtrText {
    pub fn get(&self, field: CtrField) -> &str {
        match field {
            CtrField::Impressions => &self.impressions,
            CtrField::Clicks => &self.clicks,
        }
    }

    fn slot(&mut self, field: CtrField) -> &mut String {
        match field {
            CtrField::Impressions => &mut self.impressions,
            CtrField::Clicks => &mut self.clicks,
        }
    }

    pub fn inputs(&self, policy: PresencePolicy) -> CtrInputs {
        CtrInputs::from_text(&self.impressions, &self.clicks, policy)
    }

    pub fn is_empty(&self) -> bool {
        CtrField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A user event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switch to the given mode
    SelectMode(Mode),
    /// Switch to the other mode
    ToggleMode,
    /// Replace the text of a field
    Edit { field: Field, text: String },
    /// Recompute the outcome for the active mode
    Calculate,
    /// Clear the active mode's fields and the outcome
    Reset,
}

impl Action {
    pub fn edit(field: Field, text: impl Into<String>) -> Self {
        Action::Edit {
            field,
            text: text.into(),
        }
    }
}

/// Complete state of the calculator form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricCalculator {
    settings: Settings,
    mode: Mode,
    cpm: CpmText,
    ctr: CtrText,
    outcome: Option<Outcome>,
}

impl MetricCalculator {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Start in a specific mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn cpm_text(&self) -> &CpmText {
        &self.cpm
    }

    pub fn ctr_text(&self) -> &CtrText {
        &self.ctr
    }

    /// Current text of any field, active or not
    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Cpm(f) => self.cpm.get(f),
            Field::Ctr(f) => self.ctr.get(f),
        }
    }

    /// Fields shown for the active mode
    pub fn active_fields(&self) -> Vec<Field> {
        self.mode.fields()
    }

    /// Apply a user event and return the resulting state
    pub fn apply(&self, action: Action) -> Self {
        trace!(mode = %self.mode, ?action, "applying action");
        match action {
            Action::SelectMode(mode) => self.select_mode(mode),
            Action::ToggleMode => self.select_mode(self.mode.other()),
            Action::Edit { field, text } => self.edit(field, text),
            Action::Calculate => self.calculate(),
            Action::Reset => self.reset(self.mode),
        }
    }

    /// Switch modes.
    ///
    /// Fields and outcome are kept unless `reset_on_mode_switch` is set, in
    /// which case the entered mode starts from a clean form.
    pub fn select_mode(&self, mode: Mode) -> Self {
        if !is_valid_transition(self.mode, mode) {
            return self.clone();
        }
        let next = Self {
            mode,
            ..self.clone()
        };
        if self.settings.reset_on_mode_switch {
            next.reset(mode)
        } else {
            next
        }
    }

    /// Replace a field's text. Fields of the inactive mode may be edited too.
    pub fn edit(&self, field: Field, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        let text = text.into();
        match field {
            Field::Cpm(f) => *next.cpm.slot(f) = text,
            Field::Ctr(f) => *next.ctr.slot(f) = text,
        }
        next
    }

    /// Recompute the outcome for the active mode
    pub fn calculate(&self) -> Self {
        Self {
            outcome: Some(self.compute()),
            ..self.clone()
        }
    }

    /// Outcome the active mode would produce from the current text
    pub fn compute(&self) -> Outcome {
        let policy = self.settings.presence;
        match self.mode {
            Mode::Cpm => compute_cpm(&self.cpm.inputs(policy)),
            Mode::Ctr => compute_ctr(&self.ctr.inputs(policy)),
        }
    }

    /// Clear the fields of `mode` and the outcome.
    ///
    /// The other mode's fields are left untouched.
    pub fn reset(&self, mode: Mode) -> Self {
        let mut next = self.clone();
        match mode {
            Mode::Cpm => next.cpm = CpmText::default(),
            Mode::Ctr => next.ctr = CtrText::default(),
        }
        next.outcome = None;
        next
    }
}
