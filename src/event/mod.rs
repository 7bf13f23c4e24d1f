//! Terminal event collection.
//!
//! A background task polls crossterm for keyboard and resize events and
//! emits a [`Event::Tick`] whenever nothing happened within the tick rate.

pub mod handler;

pub use handler::EventHandler;

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;

/// Default event polling interval.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Regular tick event
    Tick,
}

impl Event {
    /// Map a raw crossterm event. Key releases and repeats on terminals that
    /// report them, mouse and focus events all become ticks.
    pub fn from_crossterm(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        }
    }
}

/// Event dispatcher that collects terminal events.
pub struct EventDispatcher {
    /// Polling interval
    tick_rate: Duration,
}

impl EventDispatcher {
    /// Create a new event dispatcher with the default tick rate.
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }

    /// Set a custom tick rate.
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait for and return the next event.
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(Event::from_crossterm(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use pretty_assertions::assert_eq;

    #[test]
    fn only_key_presses_become_key_events() {
        let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(Event::from_crossterm(CrosstermEvent::Key(press)), Event::Key(press));

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert_eq!(Event::from_crossterm(CrosstermEvent::Key(release)), Event::Tick);
    }

    #[test]
    fn resize_and_other_events() {
        assert_eq!(Event::from_crossterm(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24));
        assert_eq!(Event::from_crossterm(CrosstermEvent::FocusGained), Event::Tick);
    }

    #[test]
    fn tick_rate_is_configurable() {
        let dispatcher = EventDispatcher::new().with_tick_rate(Duration::from_millis(5));
        assert_eq!(dispatcher.tick_rate(), Duration::from_millis(5));
        assert_eq!(EventDispatcher::default().tick_rate(), DEFAULT_TICK_RATE);
    }
}
