//! Presentational widgets.
//!
//! Each widget renders from the props it was built with and attaches style
//! classes; colors come from a [`StyleSheet`](crate::ui::style::StyleSheet).
//! - [`Card`]: styled container around any child widget
//! - [`Input`]: text field with an optional leading icon
//! - [`Progress`]: labeled bar with a clamped fill

pub mod card;
pub mod input;
pub mod progress;

pub use card::Card;
pub use input::{FieldHandle, Input, InputState, TextField};
pub use progress::{clamp_percent, Progress, ProgressProps};
