//! Text input widgets.
//!
//! [`TextField`] is the bare editable line. [`Input`] wraps one with an
//! optional leading icon slot and forwards every field attribute to it
//! unchanged. Both render from a caller-owned [`InputState`], which holds the
//! text and cursor and receives a [`FieldHandle`] on every render.

use std::borrow::Cow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::StatefulWidget,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::style::{ClassList, StyleSheet, INPUT, INPUT_ICON, TEXT_FIELD, TEXT_MUTED};

/// Where the text field ended up on the last render.
///
/// Written by the widgets, never read by them. Callers use it for focus
/// handling, e.g. `frame.set_cursor(x, y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldHandle {
    /// Screen area of the text field itself (icon slot excluded)
    pub area: Rect,
    /// Screen position of the text cursor, if it is inside `area`
    pub cursor: Option<(u16, u16)>,
}

/// Editable value and cursor of a text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    value: String,
    /// Cursor position as a char index into `value`
    cursor: usize,
    handle: Option<FieldHandle>,
}

impl InputState {
    /// State holding `value` with the cursor at its end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            handle: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Handle recorded by the last render, `None` before the first one.
    pub fn handle(&self) -> Option<FieldHandle> {
        self.handle
    }

    /// Shortcut for the cursor position of the last render.
    pub fn cursor_position(&self) -> Option<(u16, u16)> {
        self.handle.and_then(|h| h.cursor)
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Remove the char before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Remove the char under the cursor. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply an editing key. Returns `true` if the value changed.
    ///
    /// Keys that are not editing keys (Tab, Enter, Esc, function keys,
    /// Ctrl/Alt chords) are ignored so the caller can bind them.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(ch) => {
                self.insert(ch);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.move_home();
                false
            }
            KeyCode::End => {
                self.move_end();
                false
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Single-line editable text field.
#[derive(Debug, Clone)]
pub struct TextField<'a> {
    placeholder: Option<Cow<'a, str>>,
    /// Replacement char for every value char, for secrets
    mask: Option<char>,
    classes: ClassList<'a>,
    sheet: Cow<'a, StyleSheet>,
}

impl<'a> Default for TextField<'a> {
    fn default() -> Self {
        Self {
            placeholder: None,
            mask: None,
            classes: ClassList::new(TEXT_FIELD),
            sheet: Cow::Owned(StyleSheet::default()),
        }
    }
}

impl<'a> TextField<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown in the muted style while the value is empty.
    pub fn placeholder(mut self, placeholder: impl Into<Cow<'a, str>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn class(mut self, classes: impl Into<Cow<'a, str>>) -> Self {
        self.classes.push(classes);
        self
    }

    pub fn stylesheet(mut self, sheet: &'a StyleSheet) -> Self {
        self.sheet = Cow::Borrowed(sheet);
        self
    }

    pub fn classes(&self) -> &ClassList<'a> {
        &self.classes
    }

    fn display_text<'s>(&self, state: &'s InputState) -> Cow<'s, str> {
        match self.mask {
            Some(mask) => Cow::Owned(std::iter::repeat(mask).take(state.len()).collect()),
            None => Cow::Borrowed(state.value()),
        }
    }
}

impl<'a> StatefulWidget for TextField<'a> {
    type State = InputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.area() == 0 {
            state.handle = Some(FieldHandle { area, cursor: None });
            return;
        }

        let style = self.sheet.resolve(&self.classes);
        buf.set_style(area, style);

        if state.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                let muted = style.patch(self.sheet.class(TEXT_MUTED));
                buf.set_stringn(area.x, area.y, placeholder, area.width as usize, muted);
            }
            state.handle = Some(FieldHandle {
                area,
                cursor: Some((area.x, area.y)),
            });
            return;
        }

        let text = self.display_text(state);
        let width = area.width as usize;

        // Column of the cursor within the whole text, then scroll so it stays
        // within the last column of the field.
        let cursor_col: usize = text
            .chars()
            .take(state.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        let scroll = (cursor_col + 1).saturating_sub(width);

        let mut skipped = 0;
        let visible_start = text
            .char_indices()
            .find(|(_, c)| {
                if skipped >= scroll {
                    return true;
                }
                skipped += c.width().unwrap_or(0);
                false
            })
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let visible = &text[visible_start..];
        buf.set_stringn(area.x, area.y, visible, width, style);

        let x = area.x + (cursor_col - skipped.min(cursor_col)) as u16;
        let cursor = (x < area.right()).then_some((x, area.y));
        state.handle = Some(FieldHandle { area, cursor });
    }
}

/// Text field with an optional leading icon.
pub struct Input<'a> {
    field: TextField<'a>,
    left_icon: Option<Line<'a>>,
    classes: ClassList<'a>,
    sheet: Cow<'a, StyleSheet>,
}

impl<'a> Default for Input<'a> {
    fn default() -> Self {
        Self {
            field: TextField::default(),
            left_icon: None,
            classes: ClassList::new(INPUT),
            sheet: Cow::Owned(StyleSheet::default()),
        }
    }
}

impl<'a> Input<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `field` as the inner text field, attributes and all.
    pub fn field(mut self, field: TextField<'a>) -> Self {
        self.field = field;
        self
    }

    /// Forwarded to [`TextField::placeholder`].
    pub fn placeholder(mut self, placeholder: impl Into<Cow<'a, str>>) -> Self {
        self.field = self.field.placeholder(placeholder);
        self
    }

    /// Forwarded to [`TextField::mask`].
    pub fn mask(mut self, mask: char) -> Self {
        self.field = self.field.mask(mask);
        self
    }

    pub fn left_icon(mut self, icon: impl Into<Line<'a>>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    /// Append caller classes to the container, after `input`.
    pub fn class(mut self, classes: impl Into<Cow<'a, str>>) -> Self {
        self.classes.push(classes);
        self
    }

    /// Use `sheet` for the container, the icon slot and the inner field.
    pub fn stylesheet(mut self, sheet: &'a StyleSheet) -> Self {
        self.sheet = Cow::Borrowed(sheet);
        self.field = self.field.stylesheet(sheet);
        self
    }

    pub fn classes(&self) -> &ClassList<'a> {
        &self.classes
    }

    /// Icon slot and field areas for `area`. The slot is `None` without an icon.
    pub fn layout(&self, area: Rect) -> (Option<Rect>, Rect) {
        let Some(icon) = &self.left_icon else {
            return (None, area);
        };
        // Icon plus a one column gap, never more than the whole area.
        let slot_width = (icon.width() as u16).saturating_add(1).min(area.width);
        let slot = Rect {
            width: slot_width,
            ..area
        };
        let field = Rect {
            x: area.x + slot_width,
            width: area.width - slot_width,
            ..area
        };
        (Some(slot), field)
    }
}

impl<'a> StatefulWidget for Input<'a> {
    type State = InputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.area() == 0 {
            state.handle = Some(FieldHandle { area, cursor: None });
            return;
        }

        buf.set_style(area, self.sheet.resolve(&self.classes));

        let (slot, field_area) = self.layout(area);
        if let (Some(slot), Some(icon)) = (slot, &self.left_icon) {
            let icon_style = self.sheet.class(INPUT_ICON);
            buf.set_style(slot, icon_style);
            buf.set_line(slot.x, slot.y, icon, slot.width);
        }

        self.field.render(field_area, buf, state);
    }
}
