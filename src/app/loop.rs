use crate::app::{
    action::Action, command::Command, debounce::Debouncer, features::lookup::LookupRunner,
    input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::lookup::SymbolLookup;
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const INPUT_POLL: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    lookup: Arc<dyn SymbolLookup>,
    debounce: Duration,
) -> Result<AppState> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        if event_tx.is_closed() {
            break;
        }
        match event::poll(INPUT_POLL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, lookup, debounce, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    lookup: Arc<dyn SymbolLookup>,
    debounce: Duration,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut effects = Effects::new(lookup, debounce, action_tx);
    let mut interval = interval(TICK_RATE);
    let theme = Theme::default();

    // Lay out the page, then mount the field into it.
    let size = terminal.size()?;
    effects.dispatch(&mut app_state, Action::Resize(size.width, size.height));
    effects.dispatch(&mut app_state, Action::Mount);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state, &theme);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state)
            },

            // Timers and lookups
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            effects.dispatch(&mut app_state, action);
        }

        if app_state.should_quit {
            break;
        }
    }

    // Anything still running belongs to a field that no longer exists.
    effects.release();
    Ok(app_state)
}

/// Executes the commands the reducer returns.
struct Effects {
    debouncer: Debouncer,
    lookups: LookupRunner,
}

impl Effects {
    fn new(lookup: Arc<dyn SymbolLookup>, debounce: Duration, tx: mpsc::Sender<Action>) -> Self {
        Self {
            debouncer: Debouncer::new(debounce, tx.clone()),
            lookups: LookupRunner::new(lookup, tx),
        }
    }

    fn dispatch(&mut self, state: &mut AppState, action: Action) {
        for command in reducer::update(state, action) {
            self.apply(state, command);
        }
    }

    fn apply(&mut self, state: &mut AppState, command: Command) {
        match command {
            Command::ScheduleLookup(query) => self.debouncer.schedule(query),
            Command::CancelLookup => self.debouncer.cancel(),
            Command::Lookup {
                generation,
                query,
                market,
            } => self.lookups.dispatch(generation, query, market),
            Command::ReleaseAll => self.release(),
            Command::NotifyChange(text) => state.page.on_change(text),
            Command::NotifySelect(symbol) => state.page.on_select(symbol),
        }
    }

    fn release(&mut self) {
        self.debouncer.cancel();
        self.lookups.abort();
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
