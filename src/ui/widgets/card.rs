//! Styled container widget.
//!
//! A card draws its block and hands the inner area to its child untouched.
//! The block is taken from the caller as-is; the card only contributes the
//! `card` class in front of whatever classes the caller adds.

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, StatefulWidget, Widget},
};

use crate::ui::style::{ClassList, StyleSheet, CARD};

/// Container that renders `child` inside a styled block.
pub struct Card<'a, W> {
    block: Block<'a>,
    classes: ClassList<'a>,
    child: W,
    sheet: Cow<'a, StyleSheet>,
}

impl<'a, W> Card<'a, W> {
    pub fn new(child: W) -> Self {
        Self {
            block: Block::default().borders(Borders::ALL),
            classes: ClassList::new(CARD),
            child,
            sheet: Cow::Owned(StyleSheet::default()),
        }
    }

    /// Replace the container block. Title, borders and padding are forwarded
    /// exactly as configured by the caller.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = block;
        self
    }

    /// Append caller classes after `card`.
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

    /// Area the child is rendered into.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block.inner(area)
    }

    fn render_container(&self, area: Rect, buf: &mut Buffer) -> Rect {
        buf.set_style(area, self.sheet.resolve(&self.classes));
        let inner = self.block.inner(area);
        self.block.clone().render(area, buf);
        inner
    }
}

impl<'a, W: Widget> Widget for Card<'a, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.area() == 0 {
            return;
        }
        let inner = self.render_container(area, buf);
        self.child.render(inner, buf);
    }
}

impl<'a, W: StatefulWidget> StatefulWidget for Card<'a, W> {
    type State = W::State;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.area() == 0 {
            return;
        }
        let inner = self.render_container(area, buf);
        self.child.render(inner, buf, state);
    }
}
