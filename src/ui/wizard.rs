//! Setup wizard view.
//!
//! A centered [`Card`] holding the current step: description, a
//! [`Progress`] bar, then one labeled [`Input`] per field.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, StatefulWidget, Widget},
    Frame,
};

use crate::state::WizardState;
use crate::ui::style::TEXT_MUTED;
use crate::ui::widgets::{Card, Input, Progress, TextField};
use crate::ui::Theme;

/// Widest the card gets on large terminals.
const CARD_WIDTH: u16 = 56;

/// Rows used by the header: description, gap, progress (2), gap.
const HEADER_ROWS: u16 = 5;

/// Rows per field: label, input, gap.
const FIELD_ROWS: u16 = 3;

/// Body of the wizard card for the current step.
pub struct StepForm<'a> {
    theme: &'a Theme,
}

impl<'a> StepForm<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Rows the body needs for the current state.
    pub fn height(state: &WizardState) -> u16 {
        if state.is_completed() {
            return HEADER_ROWS + 2;
        }
        let fields = state.current_step().map_or(0, |s| s.fields.len()) as u16;
        // One extra row for the validation message.
        HEADER_ROWS + fields * FIELD_ROWS + 1
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, state: &WizardState) {
        let description = if state.is_completed() {
            "Your account is ready."
        } else {
            state.current_step().map_or("", |s| s.description)
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(area);

        Paragraph::new(description)
            .style(self.theme.normal_text)
            .render(rows[0], buf);

        Progress::new(state.progress_percent())
            .left_label("Progress")
            .right_label(state.step_label())
            .stylesheet(&self.theme.sheet)
            .render(rows[2], buf);
    }

    fn render_fields(&self, area: Rect, buf: &mut Buffer, state: &mut WizardState) {
        let Some(step) = state.current_step().cloned() else {
            return;
        };
        let focus = state.focus();
        let sheet = &self.theme.sheet;
        let muted = sheet.class(TEXT_MUTED);

        let mut y = area.y;
        for (i, (spec, value)) in step.fields.iter().zip(state.fields_mut()).enumerate() {
            if y + 1 >= area.bottom() {
                break;
            }
            let label_style = if i == focus {
                self.theme.header_style
            } else {
                muted
            };
            buf.set_stringn(area.x, y, spec.label, area.width as usize, label_style);

            let mut field = TextField::new().placeholder(spec.placeholder);
            if spec.secret {
                field = field.mask('•');
            }
            let mut input = Input::new().field(field).stylesheet(sheet);
            if let Some(icon) = spec.icon {
                input = input.left_icon(icon);
            }
            if i == focus {
                input = input.class("input-focus");
            }
            input.render(Rect::new(area.x, y + 1, area.width, 1), buf, value);
            y += FIELD_ROWS;
        }

        if let Some(error) = state.error() {
            if y < area.bottom() {
                let style = sheet.class("text-error");
                buf.set_stringn(area.x, y, error, area.width as usize, style);
            }
        }
    }

    fn render_done(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled("All set!", self.theme.done_style)),
            Line::from(vec![
                Span::styled("Enter", self.theme.key_style),
                Span::styled(" to quit, ", self.theme.help_style),
                Span::styled("Esc", self.theme.key_style),
                Span::styled(" to go back", self.theme.help_style),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

impl<'a> StatefulWidget for StepForm<'a> {
    type State = WizardState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height < HEADER_ROWS {
            return;
        }
        let header = Rect {
            height: HEADER_ROWS,
            ..area
        };
        let body = Rect {
            y: area.y + HEADER_ROWS,
            height: area.height - HEADER_ROWS,
            ..area
        };

        self.render_header(header, buf, state);
        if state.is_completed() {
            self.render_done(body, buf);
        } else {
            self.render_fields(body, buf, state);
        }
    }
}

/// Wizard screen.
pub struct WizardView;

impl WizardView {
    /// Render the wizard card and place the terminal cursor on the focused field.
    pub fn render(frame: &mut Frame, area: Rect, state: &mut WizardState, theme: &Theme) {
        let title = match state.current_step() {
            Some(step) if !state.is_completed() => format!(" Setup: {} ", step.title),
            _ => " Setup ".to_owned(),
        };
        let card_area = centered(CARD_WIDTH, StepForm::height(state) + 2, area);

        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .style(theme.block_style);
        let mut card = Card::new(StepForm::new(theme))
            .block(block)
            .stylesheet(&theme.sheet);
        if state.is_completed() {
            card = card.class("card-focus");
        }
        frame.render_stateful_widget(card, card_area, state);

        let cursor = if state.is_completed() {
            None
        } else {
            state
                .fields()
                .get(state.focus())
                .and_then(|field| field.cursor_position())
        };
        if let Some((x, y)) = cursor {
            frame.set_cursor(x, y);
        }
    }
}

/// Rect of at most `width` x `height`, centered in `area`.
pub(crate) fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(
        state: &mut WizardState,
        width: u16,
        height: u16,
    ) -> (Vec<String>, Option<(u16, u16)>) {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                WizardView::render(frame, area, state, &theme)
            })
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let rows = (0..height)
            .map(|y| (0..width).map(|x| buf.get(x, y).symbol()).collect())
            .collect();
        (rows, state.fields().get(state.focus()).and_then(|f| f.cursor_position()))
    }

    #[test]
    fn centered_clamps_to_area() {
        assert_eq!(centered(10, 4, Rect::new(0, 0, 20, 10)), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(50, 40, Rect::new(2, 2, 20, 10)), Rect::new(2, 2, 20, 10));
    }

    #[test]
    fn form_height_tracks_fields() {
        let mut state = WizardState::default();
        assert_eq!(StepForm::height(&state), HEADER_ROWS + 2 * FIELD_ROWS + 1);
        for field in state.fields_mut() {
            field.set_value("x");
        }
        state.advance();
        assert_eq!(StepForm::height(&state), HEADER_ROWS + FIELD_ROWS + 1);
    }

    #[test]
    fn first_step_shows_progress_and_placeholders() {
        let mut state = WizardState::default();
        let (rows, cursor) = screen(&mut state, 60, 20);
        let text = rows.join("\n");
        assert!(text.contains("Setup: Profile"));
        assert!(text.contains("Step 1 of 2"));
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("Email"));
        // Empty field: cursor sits at the start of the focused field, after the icon slot.
        let (x, _) = cursor.expect("cursor on focused field");
        assert!(rows.iter().any(|r| r.contains("░░░░")));
        assert!(x > 2);
    }

    #[test]
    fn error_is_rendered_under_fields() {
        let mut state = WizardState::default();
        state.advance();
        let (rows, _) = screen(&mut state, 60, 20);
        assert!(rows.iter().any(|r| r.contains("Name is required")));
    }

    #[test]
    fn password_is_masked() {
        let mut state = WizardState::default();
        for field in state.fields_mut() {
            field.set_value("x");
        }
        state.advance();
        state.fields_mut()[0].set_value("hunter2");
        let (rows, _) = screen(&mut state, 60, 20);
        let text = rows.join("\n");
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
    }
}
