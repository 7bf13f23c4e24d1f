//! Class-based styling.
//!
//! Widgets never pick colors themselves. They attach class names, and a
//! [`StyleSheet`] turns an ordered [`ClassList`] into a ratatui [`Style`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use ratatui::style::{Color, Modifier, Style};

/// Base class of the [`Card`](super::widgets::Card) container.
pub const CARD: &str = "card";
/// Base class of the [`Input`](super::widgets::Input) container.
pub const INPUT: &str = "input";
/// Class of the leading icon slot inside an input.
pub const INPUT_ICON: &str = "input-icon";
/// Base class of the [`TextField`](super::widgets::TextField).
pub const TEXT_FIELD: &str = "text-field";
/// Muted/secondary text (labels, placeholders).
pub const TEXT_MUTED: &str = "text-muted";
/// The unfilled progress track.
pub const PROGRESS_TRACK: &str = "progress-track";
/// The filled part of the progress track.
pub const PROGRESS_FILL: &str = "progress-fill";

/// Ordered list of style class names.
///
/// The first entry is the component's own base class. Caller classes are
/// appended after it and can never replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassList<'a> {
    classes: Vec<Cow<'a, str>>,
}

impl<'a> ClassList<'a> {
    /// Create a list holding only the base class.
    pub fn new(base: impl Into<Cow<'a, str>>) -> Self {
        Self {
            classes: vec![base.into()],
        }
    }

    /// Append caller classes. A string may carry several whitespace
    /// separated names, as in a markup `class` attribute.
    pub fn push(&mut self, classes: impl Into<Cow<'a, str>>) {
        match classes.into() {
            Cow::Borrowed(s) => self
                .classes
                .extend(s.split_whitespace().map(Cow::Borrowed)),
            Cow::Owned(s) => self
                .classes
                .extend(s.split_whitespace().map(|c| Cow::Owned(c.to_owned()))),
        }
    }

    /// Builder form of [`ClassList::push`].
    pub fn with(mut self, classes: impl Into<Cow<'a, str>>) -> Self {
        self.push(classes);
        self
    }

    /// The component's own class.
    pub fn base(&self) -> &str {
        &self.classes[0]
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.as_ref())
    }

    /// Never zero: the base class is always present.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.classes.len()
    }
}

impl fmt::Display for ClassList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classes.iter().join(" "))
    }
}

/// Mapping from class names to styles.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    rules: HashMap<String, Style>,
}

impl StyleSheet {
    /// A sheet with no rules. Everything resolves to `Style::default()`.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Add or replace the rule for `class`.
    pub fn rule(mut self, class: impl Into<String>, style: Style) -> Self {
        self.rules.insert(class.into(), style);
        self
    }

    pub fn get(&self, class: &str) -> Option<Style> {
        self.rules.get(class).copied()
    }

    /// Style for a single class, or the default style if it has no rule.
    pub fn class(&self, class: &str) -> Style {
        self.get(class).unwrap_or_default()
    }

    /// Fold the rules of every listed class, in list order.
    ///
    /// Later classes win attribute by attribute. Unknown names are skipped.
    pub fn resolve(&self, classes: &ClassList<'_>) -> Style {
        classes.iter().fold(Style::default(), |style, class| {
            match self.rules.get(class) {
                Some(rule) => style.patch(*rule),
                None => {
                    tracing::trace!(class, "no style rule for class");
                    style
                }
            }
        })
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::empty()
            .rule(CARD, Style::default().fg(Color::White))
            .rule("card-focus", Style::default().fg(Color::Cyan))
            .rule(INPUT, Style::default().fg(Color::White))
            .rule("input-focus", Style::default().fg(Color::Yellow))
            .rule(INPUT_ICON, Style::default().fg(Color::Cyan))
            .rule(TEXT_FIELD, Style::default().fg(Color::White))
            .rule(TEXT_MUTED, Style::default().fg(Color::DarkGray))
            .rule(
                "text-error",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
            .rule(PROGRESS_TRACK, Style::default().fg(Color::DarkGray))
            .rule(PROGRESS_FILL, Style::default().fg(Color::Green))
    }
}
