//! Application state and logic.
//!
//! Glues the wizard state, the UI controller and the event stream together.

use std::time::Duration;

use color_eyre::Result;
use crossterm::event::KeyEvent;
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::event::Event;
use crate::state::WizardState;
use crate::ui::{Ui, UpdateKind};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Main application.
pub struct App {
    /// Wizard state
    state: WizardState,
    /// Application configuration
    config: AppConfig,
    /// Current view controller
    ui: Ui,
    /// Should the application exit?
    should_quit: bool,
}

impl App {
    /// Creates a new application instance.
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: WizardState::default(),
            config,
            ui: Ui::new(),
            should_quit: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the application main loop until quit or the event stream ends.
    pub async fn run<B, S>(&mut self, terminal: &mut Terminal<B>, events: &mut S) -> Result<()>
    where
        B: Backend,
        S: Stream<Item = Event> + Unpin,
    {
        while !self.should_quit {
            // Draw the UI
            terminal.draw(|frame| self.ui.render(frame, &mut self.state))?;

            // Handle events
            match events.next().await {
                Some(event) => self.handle_event(event)?,
                None => break,
            }
        }

        Ok(())
    }

    /// Handles input and other events.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Tick => Ok(()),
            Event::Resize(width, height) => {
                // The next draw picks up the new size.
                tracing::debug!(width, height, "terminal resized");
                Ok(())
            }
        }
    }

    /// Handles keyboard input.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        let update = self.ui.handle_key_event(key, &mut self.state)?;

        tracing::debug!(?key, ?update, "key handled");

        match update {
            UpdateKind::Quit => self.should_quit = true,
            UpdateKind::ToggleHelp => self.ui.toggle_help(),
            UpdateKind::StepChanged => {
                tracing::info!(
                    step = self.state.step_index(),
                    completed = self.state.is_completed(),
                    "step changed"
                );
            }
            UpdateKind::Edited | UpdateKind::Other => {}
        }

        Ok(())
    }
}
