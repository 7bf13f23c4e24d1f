//! UI components for the cardkit demo.
//!
//! The reusable pieces live in [`widgets`] and [`style`]. The rest of this
//! module is the controller for the setup wizard: it maps keys onto wizard
//! actions and draws the wizard, the status line and the help overlay.

pub mod help;
pub mod style;
pub mod theme;
pub mod widgets;
pub mod wizard;

pub use help::HelpView;
pub use style::{ClassList, StyleSheet};
pub use theme::Theme;
pub use wizard::WizardView;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use eyre::Result;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{Advance, WizardState};

/// The result of updating the UI in response to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// A field value changed
    Edited,
    /// The wizard moved to another step or finished
    StepChanged,
    /// Other update (no action needed)
    Other,
}

/// Main UI controller.
pub struct Ui {
    /// Whether to show help overlay
    show_help: bool,
    /// UI theme
    theme: Theme,
}

impl Ui {
    /// Create a new UI controller.
    pub fn new() -> Self {
        Self {
            show_help: false,
            theme: Theme::default(),
        }
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Toggle help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Handle keyboard input.
    pub fn handle_key_event(
        &mut self,
        key: KeyEvent,
        state: &mut WizardState,
    ) -> Result<UpdateKind> {
        // Global shortcuts first
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(UpdateKind::Quit)
            }
            KeyCode::F(1) => return Ok(UpdateKind::ToggleHelp),
            _ => {}
        }

        // While help is open, keys only close it.
        if self.show_help {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => UpdateKind::ToggleHelp,
                _ => UpdateKind::Other,
            });
        }

        if state.is_completed() {
            return Ok(self.handle_done_input(key, state));
        }

        let update = match key.code {
            KeyCode::Tab | KeyCode::Down => {
                state.focus_next();
                UpdateKind::Other
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.focus_prev();
                UpdateKind::Other
            }
            KeyCode::Enter => match state.advance() {
                Advance::Next | Advance::Completed => UpdateKind::StepChanged,
                Advance::Incomplete => UpdateKind::Other,
            },
            KeyCode::Esc => {
                if state.back() {
                    UpdateKind::StepChanged
                } else {
                    UpdateKind::Other
                }
            }
            _ => {
                if state.focused_field_mut().is_some_and(|f| f.handle_key(key)) {
                    UpdateKind::Edited
                } else {
                    UpdateKind::Other
                }
            }
        };

        Ok(update)
    }

    /// Render the UI.
    pub fn render(&self, frame: &mut Frame, state: &mut WizardState) {
        let area = frame.size();
        if area.height < 2 {
            return;
        }
        let main_area = Rect {
            height: area.height - 1,
            ..area
        };

        WizardView::render(frame, main_area, state, &self.theme);

        // Render help overlay if active (always on top)
        if self.show_help {
            HelpView::render(frame, main_area, &self.theme);
        }

        self.render_status_line(frame, area, state);
    }

    fn handle_done_input(&mut self, key: KeyEvent, state: &mut WizardState) -> UpdateKind {
        match key.code {
            KeyCode::Enter | KeyCode::Char('q') => UpdateKind::Quit,
            KeyCode::Char('?') => UpdateKind::ToggleHelp,
            KeyCode::Esc => {
                state.back();
                UpdateKind::StepChanged
            }
            _ => UpdateKind::Other,
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);

        let status_text = if state.is_completed() {
            "DONE | Enter to quit | F1 for help".to_owned()
        } else {
            format!(
                "{} | {} | F1 for help | Ctrl+C to quit",
                state.current_step().map_or("", |s| s.title),
                state.step_label(),
            )
        };

        let style = if state.is_completed() {
            self.theme.done_style
        } else {
            self.theme.status_style
        };

        frame.render_widget(Paragraph::new(status_text).style(style), status_area);
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(ui: &mut Ui, state: &mut WizardState, text: &str) {
        for ch in text.chars() {
            assert_eq!(
                ui.handle_key_event(key(KeyCode::Char(ch)), state).unwrap(),
                UpdateKind::Edited
            );
        }
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut ui = Ui::new();
        let mut state = WizardState::default();
        type_text(&mut ui, &mut state, "Ada");
        ui.handle_key_event(key(KeyCode::Tab), &mut state).unwrap();
        type_text(&mut ui, &mut state, "a@b.c");
        assert_eq!(state.value(0, 0), Some("Ada"));
        assert_eq!(state.value(0, 1), Some("a@b.c"));
    }

    #[test]
    fn full_walkthrough_ends_in_quit() {
        let mut ui = Ui::new();
        let mut state = WizardState::default();
        assert_eq!(
            ui.handle_key_event(key(KeyCode::Enter), &mut state).unwrap(),
            UpdateKind::Other
        );

        type_text(&mut ui, &mut state, "Ada");
        ui.handle_key_event(key(KeyCode::Down), &mut state).unwrap();
        type_text(&mut ui, &mut state, "ada@example.com");
        assert_eq!(
            ui.handle_key_event(key(KeyCode::Enter), &mut state).unwrap(),
            UpdateKind::StepChanged
        );

        type_text(&mut ui, &mut state, "secret");
        assert_eq!(
            ui.handle_key_event(key(KeyCode::Enter), &mut state).unwrap(),
            UpdateKind::StepChanged
        );
        assert!(state.is_completed());
        assert_eq!(ui.handle_key_event(key(KeyCode::Enter), &mut state).unwrap(), UpdateKind::Quit);
    }

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), UpdateKind::Quit)]
    #[case(key(KeyCode::F(1)), UpdateKind::ToggleHelp)]
    #[case(key(KeyCode::Char('q')), UpdateKind::Edited)]
    #[case(key(KeyCode::Esc), UpdateKind::Other)]
    fn keys_on_first_step(#[case] event: KeyEvent, #[case] expected: UpdateKind) {
        let mut ui = Ui::new();
        let mut state = WizardState::default();
        assert_eq!(ui.handle_key_event(event, &mut state).unwrap(), expected);
    }

    #[test]
    fn help_swallows_keys() {
        let mut ui = Ui::new();
        let mut state = WizardState::default();
        ui.toggle_help();
        assert_eq!(
            ui.handle_key_event(key(KeyCode::Char('x')), &mut state).unwrap(),
            UpdateKind::Other
        );
        assert_eq!(state.value(0, 0), Some(""));
        assert_eq!(
            ui.handle_key_event(key(KeyCode::Esc), &mut state).unwrap(),
            UpdateKind::ToggleHelp
        );
    }
}
