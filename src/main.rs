use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use miette::IntoDiagnostic;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use covershelf::config::AppConfig;
use covershelf::core::{logging, Catalog, Session};
use covershelf::tui::app::AppState;
use covershelf::tui::trigger::TriggerKey;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    let _log_guard = logging::init_tui();
    log::info!("{} v{} starting", covershelf::NAME, covershelf::VERSION);

    let config = AppConfig::load();

    // Fail before touching the terminal so the report is readable.
    let catalog = Catalog::load(config.catalog_path())?;
    log::info!(
        "Catalog ready: {} modules in {} categories",
        catalog.len(),
        catalog.categories().len().saturating_sub(1)
    );

    let trigger = TriggerKey::from_config(&config.disguise.trigger);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(Session::new(catalog), trigger, event_rx, event_tx);

    // Setup terminal
    enable_raw_mode().into_diagnostic()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).into_diagnostic()?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture).into_diagnostic()?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).into_diagnostic()?;

    // Run the app
    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode().into_diagnostic()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture).into_diagnostic()?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen).into_diagnostic()?;
    terminal.show_cursor().into_diagnostic()?;

    if let Err(e) = &result {
        log::error!("Event loop failed: {e}");
    }
    log::info!("{} exiting", covershelf::NAME);

    result.into_diagnostic()
}
