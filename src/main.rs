use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use tickerseek::app::{
    config::{Cli, Config},
    logging,
    r#loop::run_loop,
    state::AppState,
};
use tickerseek::infrastructure::HttpSymbolLookup;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();
    let cli = Cli::parse();

    // Everything that can fail on bad input happens BEFORE terminal setup,
    // so the terminal is never left in raw mode.
    let config = Config::load(&cli)?;
    if let Some(path) = config.log_path() {
        logging::init(&path)?;
    }
    tracing::info!(
        target: "tickerseek",
        base_url = %config.base_url,
        market = %config.market,
        debounce_ms = config.debounce_ms,
        "starting"
    );
    let lookup = Arc::new(
        HttpSymbolLookup::new(&config.base_url, config.request_timeout())
            .with_context(|| format!("invalid base URL {}", config.base_url))?,
    );
    let app_state = AppState::new(config.search_config());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, lookup, config.debounce()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(state) => {
            tracing::info!(target: "tickerseek", selected = ?state.page.selected, "exiting");
            if let Some(symbol) = state.page.selected {
                println!("{symbol}");
            }
        }
        Err(err) => {
            tracing::error!(target: "tickerseek", error = ?err, "event loop failed");
            println!("{err:?}");
        }
    }

    Ok(())
}
