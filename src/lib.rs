//! cardkit library
//!
//! Presentational ratatui widgets (card, labeled input, progress bar) with
//! class-based styling, plus the setup wizard demo built from them.

pub mod app;
pub mod event;
pub mod state;
pub mod ui;

pub use ui::widgets::{
    clamp_percent, Card, FieldHandle, Input, InputState, Progress, ProgressProps, TextField,
};
