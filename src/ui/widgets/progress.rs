//! Labeled progress bar widget.
//!
//! Renders a header row with two optional labels above a horizontal track.
//! The fill width follows a percentage that is always clamped into
//! `[0, 100]`; bad input degrades silently instead of failing:
//! - a missing or NaN value counts as 0
//! - negative values show an empty track
//! - values above 100 show a full track

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
};
use serde::{Deserialize, Deserializer};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::{ClassList, StyleSheet, PROGRESS_FILL, PROGRESS_TRACK, TEXT_MUTED};

/// Bound `value` to a percentage.
///
/// `None` and NaN map to 0, everything else is clamped into `[0, 100]`.
pub fn clamp_percent(value: Option<f64>) -> f64 {
    let v = match value {
        Some(v) if !v.is_nan() => v,
        Some(_) => {
            tracing::debug!("progress value is NaN, rendering as 0");
            0.0
        }
        None => 0.0,
    };

    if !(0.0..=100.0).contains(&v) {
        tracing::debug!(value = v, "progress value out of range, clamping");
    }
    v.clamp(0.0, 100.0)
}

/// Horizontal progress indicator with a left and a right label.
pub struct Progress<'a> {
    /// Optional block drawn around the header and track
    block: Option<Block<'a>>,
    /// Raw value as given by the caller
    value: Option<f64>,
    left_label: Option<Cow<'a, str>>,
    right_label: Option<Cow<'a, str>>,
    /// Track classes, `progress-track` first
    classes: ClassList<'a>,
    /// Symbol for the filled part (default: █)
    symbol_filled: &'a str,
    /// Symbol for the empty part (default: ░)
    symbol_empty: &'a str,
    sheet: Cow<'a, StyleSheet>,
}

impl<'a> Default for Progress<'a> {
    fn default() -> Self {
        Self {
            block: None,
            value: None,
            left_label: None,
            right_label: None,
            classes: ClassList::new(PROGRESS_TRACK),
            symbol_filled: "█",
            symbol_empty: "░",
            sheet: Cow::Owned(StyleSheet::default()),
        }
    }
}

impl<'a> Progress<'a> {
    /// Create a progress bar for `value`, nominally in `[0, 100]`.
    pub fn new(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    /// Set or unset the raw value.
    pub fn value(mut self, value: Option<f64>) -> Self {
        self.value = value;
        self
    }

    pub fn left_label(mut self, label: impl Into<Cow<'a, str>>) -> Self {
        self.left_label = Some(label.into());
        self
    }

    pub fn right_label(mut self, label: impl Into<Cow<'a, str>>) -> Self {
        self.right_label = Some(label.into());
        self
    }

    /// Add caller classes to the track. `progress-track` stays first.
    pub fn class(mut self, classes: impl Into<Cow<'a, str>>) -> Self {
        self.classes.push(classes);
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn symbols(mut self, filled: &'a str, empty: &'a str) -> Self {
        self.symbol_filled = filled;
        self.symbol_empty = empty;
        self
    }

    /// Resolve classes against `sheet` instead of the default sheet.
    pub fn stylesheet(mut self, sheet: &'a StyleSheet) -> Self {
        self.sheet = Cow::Borrowed(sheet);
        self
    }

    /// The effective fill percentage, always within `[0, 100]`.
    pub fn percent(&self) -> f64 {
        clamp_percent(self.value)
    }

    /// Header text on the left, empty when no label was given.
    pub fn left_text(&self) -> &str {
        self.left_label.as_deref().unwrap_or("")
    }

    /// Header text on the right, empty when no label was given.
    pub fn right_text(&self) -> &str {
        self.right_label.as_deref().unwrap_or("")
    }

    pub fn classes(&self) -> &ClassList<'a> {
        &self.classes
    }

    /// Number of filled cells on a track `width` cells wide.
    pub fn filled_width(&self, width: u16) -> u16 {
        ((f64::from(width) * self.percent()) / 100.0).round() as u16
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, style: Style) {
        let left = self.left_text();
        let right = self.right_text();
        let width = area.width as usize;

        let (x, _) = buf.set_stringn(area.x, area.y, left, width, style);
        let used = (x - area.x) as usize;

        // Right label is aligned to the right edge but never overwrites the left one.
        let room = width.saturating_sub(used + usize::from(used > 0));
        if room == 0 || right.is_empty() {
            return;
        }
        let shown = truncate_to_width(right, room);
        let start = area.right() - shown.width() as u16;
        buf.set_stringn(start, area.y, shown, room, style);
    }

    fn render_track(&self, area: Rect, buf: &mut Buffer, track: Style, fill: Style) {
        let filled = self.filled_width(area.width);
        let y = area.y;
        for x in area.left()..area.left().saturating_add(filled) {
            buf.get_mut(x, y).set_symbol(self.symbol_filled).set_style(fill);
        }
        for x in area.left().saturating_add(filled)..area.right() {
            buf.get_mut(x, y).set_symbol(self.symbol_empty).set_style(track);
        }
    }
}

/// Longest prefix of `s` that fits in `max` columns.
fn truncate_to_width(s: &str, max: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max {
            return &s[..idx];
        }
        used += w;
    }
    s
}

impl<'a> Widget for Progress<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = match self.block {
            Some(ref block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        if area.height < 1 || area.width < 1 {
            return;
        }

        let track_style = self.sheet.resolve(&self.classes);
        let fill_style = track_style.patch(self.sheet.class(PROGRESS_FILL));
        let muted = self.sheet.class(TEXT_MUTED);

        if area.height == 1 {
            self.render_track(area, buf, track_style, fill_style);
            return;
        }

        let header = Rect { height: 1, ..area };
        let track = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        self.render_header(header, buf, muted);
        self.render_track(track, buf, track_style, fill_style);
    }
}

/// Props record for building a [`Progress`] from loosely typed data.
///
/// `value` is lenient: only JSON numbers are used, anything else (null,
/// booleans, strings, even numeric ones, objects) is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressProps {
    #[serde(deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    pub left_label: Option<String>,
    pub right_label: Option<String>,
}

impl ProgressProps {
    /// Borrowing conversion into a widget.
    pub fn to_widget(&self) -> Progress<'_> {
        let mut progress = Progress::default().value(self.value);
        if let Some(label) = &self.left_label {
            progress = progress.left_label(label.as_str());
        }
        if let Some(label) = &self.right_label {
            progress = progress.right_label(label.as_str());
        }
        progress
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let value = match &raw {
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    };
    if value.is_none() && !raw.is_null() {
        tracing::debug!(%raw, "non-numeric progress value, rendering as 0");
    }
    Ok(value)
}
