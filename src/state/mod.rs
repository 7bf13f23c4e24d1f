//! Application state management.
//!
//! The wizard owns one [`InputState`] per field of every step, so values
//! survive moving back and forth between steps.

mod step;

pub use step::{default_steps, FieldSpec, StepSpec};

use crate::ui::widgets::InputState;

/// Outcome of trying to leave the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step.
    Next,
    /// Left the last step; the wizard is done.
    Completed,
    /// A field is still empty; stayed on the step.
    Incomplete,
}

/// Application state.
#[derive(Debug, Clone)]
pub struct WizardState {
    steps: Vec<StepSpec>,
    /// Field values, indexed by step then field
    values: Vec<Vec<InputState>>,
    /// Index of the current step
    step: usize,
    /// Index of the focused field on the current step
    focus: usize,
    completed: bool,
    /// Validation message for the current step
    error: Option<String>,
}

impl WizardState {
    /// Creates a wizard over `steps`.
    pub fn new(steps: Vec<StepSpec>) -> Self {
        let values = steps
            .iter()
            .map(|s| vec![InputState::default(); s.fields.len()])
            .collect();
        Self {
            steps,
            values,
            step: 0,
            focus: 0,
            completed: false,
            error: None,
        }
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> Option<&StepSpec> {
        self.steps.get(self.step)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Focused field index on the current step.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Values of the current step's fields.
    pub fn fields(&self) -> &[InputState] {
        self.values.get(self.step).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields_mut(&mut self) -> &mut [InputState] {
        match self.values.get_mut(self.step) {
            Some(values) => values.as_mut_slice(),
            None => &mut [],
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut InputState> {
        if self.completed {
            return None;
        }
        let focus = self.focus;
        self.fields_mut().get_mut(focus)
    }

    /// Value of a field on any step.
    pub fn value(&self, step: usize, field: usize) -> Option<&str> {
        self.values.get(step)?.get(field).map(InputState::value)
    }

    pub fn focus_next(&mut self) {
        let n = self.fields().len();
        if n > 0 {
            self.focus = (self.focus + 1) % n;
        }
    }

    pub fn focus_prev(&mut self) {
        let n = self.fields().len();
        if n > 0 {
            self.focus = (self.focus + n - 1) % n;
        }
    }

    /// Leave the current step if every field on it has a value.
    pub fn advance(&mut self) -> Advance {
        if self.completed {
            return Advance::Completed;
        }

        if let Some(missing) = self.fields().iter().position(InputState::is_empty) {
            let label = self
                .current_step()
                .and_then(|s| s.fields.get(missing))
                .map_or("field", |f| f.label);
            self.error = Some(format!("{label} is required"));
            self.focus = missing;
            tracing::debug!(step = self.step, field = missing, "step incomplete");
            return Advance::Incomplete;
        }

        self.error = None;
        self.focus = 0;
        if self.step + 1 < self.steps.len() {
            self.step += 1;
            tracing::info!(step = self.step, "advanced to next step");
            Advance::Next
        } else {
            self.completed = true;
            tracing::info!("wizard completed");
            Advance::Completed
        }
    }

    /// Go back one step. Returns `false` on the first step.
    pub fn back(&mut self) -> bool {
        if self.completed {
            self.completed = false;
            self.focus = 0;
            return true;
        }
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        self.focus = 0;
        self.error = None;
        true
    }

    /// Progress through the wizard, in percent.
    pub fn progress_percent(&self) -> f64 {
        if self.completed || self.steps.is_empty() {
            return 100.0;
        }
        self.step as f64 / self.steps.len() as f64 * 100.0
    }

    /// Right-hand progress label, e.g. `Step 1 of 2`.
    pub fn step_label(&self) -> String {
        if self.completed {
            "Done".to_owned()
        } else {
            format!("Step {} of {}", self.step + 1, self.steps.len())
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(default_steps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill_current(state: &mut WizardState) {
        for field in state.fields_mut() {
            field.set_value("x");
        }
    }

    #[test]
    fn starts_on_first_step() {
        let state = WizardState::default();
        assert_eq!(state.step_index(), 0);
        assert_eq!(state.step_count(), 2);
        assert_eq!(state.progress_percent(), 0.0);
        assert_eq!(state.step_label(), "Step 1 of 2");
        assert_eq!(state.current_step().map(|s| s.title), Some("Profile"));
    }

    #[test]
    fn empty_fields_block_advance() {
        let mut state = WizardState::default();
        state.fields_mut()[0].set_value("Ada");
        assert_eq!(state.advance(), Advance::Incomplete);
        assert_eq!(state.error(), Some("Email is required"));
        assert_eq!(state.focus(), 1);
        assert_eq!(state.step_index(), 0);
    }

    #[test]
    fn walks_through_all_steps() {
        let mut state = WizardState::default();
        fill_current(&mut state);
        assert_eq!(state.advance(), Advance::Next);
        assert_eq!(state.error(), None);
        assert_eq!(state.progress_percent(), 50.0);
        assert_eq!(state.step_label(), "Step 2 of 2");

        fill_current(&mut state);
        assert_eq!(state.advance(), Advance::Completed);
        assert!(state.is_completed());
        assert_eq!(state.progress_percent(), 100.0);
        assert_eq!(state.step_label(), "Done");
        assert!(state.focused_field_mut().is_none());
        assert_eq!(state.advance(), Advance::Completed);
    }

    #[test]
    fn back_keeps_values() {
        let mut state = WizardState::default();
        fill_current(&mut state);
        state.advance();
        assert!(state.back());
        assert_eq!(state.step_index(), 0);
        assert_eq!(state.value(0, 1), Some("x"));
        assert!(!state.back());
    }

    #[test]
    fn back_from_done_reopens_last_step() {
        let mut state = WizardState::default();
        fill_current(&mut state);
        state.advance();
        fill_current(&mut state);
        state.advance();
        assert!(state.back());
        assert!(!state.is_completed());
        assert_eq!(state.step_index(), 1);
    }

    #[test]
    fn focus_wraps() {
        let mut state = WizardState::default();
        state.focus_prev();
        assert_eq!(state.focus(), 1);
        state.focus_next();
        assert_eq!(state.focus(), 0);
    }

    #[test]
    fn no_steps_is_complete_progress() {
        let state = WizardState::new(Vec::new());
        assert_eq!(state.progress_percent(), 100.0);
        assert!(state.fields().is_empty());
    }
}
