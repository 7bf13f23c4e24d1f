//! cardkit - setup wizard demo
//!
//! Walks through a two-step form rendered with the cardkit widgets.

use std::io;

use cardkit::app::{App, AppConfig};
use cardkit::event::EventHandler;
use color_eyre::Result;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Set up error handling
    color_eyre::install()?;

    // Setup logging. Logs go to stderr so they stay off the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::new();
    let mut events = EventHandler::new(config.tick_rate());
    let mut app = App::new(config);

    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    // Restore the terminal before reporting any error from the loop.
    let result = app.run(&mut terminal, &mut events).await;
    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;

    Ok(())
}
