use super::*;
use crate::app::state::SearchConfig;
use crate::domain::lookup::{LookupError, MockSymbolLookup};
use crate::domain::models::{Market, SymbolMatch};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

async fn send_text(tx: &mpsc::Sender<Result<Event, std::io::Error>>, text: &str) {
    for c in text.chars() {
        tx.send(Ok(key(KeyCode::Char(c)))).await.unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn test_typing_then_enter_selects_symbol() {
    let mut mock = MockSymbolLookup::new();
    mock.expect_search()
        .withf(|query, market| query == "REL" && *market == Market::Domestic)
        .times(1)
        .returning(|_, market| {
            Ok(vec![
                SymbolMatch::new("RELIANCE.NS", "Reliance Industries", market),
                SymbolMatch::new("RELAXO.NS", "Relaxo Footwears", market),
            ])
        });

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        send_text(&event_tx, "rel").await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        event_tx.send(Ok(key(KeyCode::Enter))).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        event_tx.send(Ok(ctrl_c())).await.unwrap();
    });

    let state = run_loop_with_events(
        &mut terminal,
        AppState::new(SearchConfig::default()),
        Arc::new(mock),
        Duration::from_millis(200),
        event_rx,
    )
    .await
    .unwrap();
    feeder.await.unwrap();

    assert!(state.should_quit);
    assert_eq!(state.page.selected.as_deref(), Some("RELIANCE.NS"));
    assert_eq!(state.page.history, vec!["RELIANCE.NS".to_string()]);
    assert_eq!(state.page.last_change, "REL");
    assert!(state.search.is_none());
    assert!(state.page.listeners.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failed_lookup_renders_no_results() {
    let mut mock = MockSymbolLookup::new();
    mock.expect_search()
        .times(1)
        .returning(|_, _| Err(LookupError::Status(503)));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        send_text(&event_tx, "tcs").await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        // Tab away, so the q below quits instead of typing.
        event_tx.send(Ok(key(KeyCode::Tab))).await.unwrap();
        event_tx.send(Ok(key(KeyCode::Char('q')))).await.unwrap();
    });

    let state = run_loop_with_events(
        &mut terminal,
        AppState::new(SearchConfig::default()),
        Arc::new(mock),
        Duration::from_millis(200),
        event_rx,
    )
    .await
    .unwrap();
    feeder.await.unwrap();

    assert!(state.page.selected.is_none());
    assert!(state.page.listeners.is_empty());
    assert!(screen_text(&terminal).contains("NO RESULTS FOR \"TCS\""));
}

#[tokio::test(start_paused = true)]
async fn test_clearing_before_quiet_period_skips_lookup() {
    let mut mock = MockSymbolLookup::new();
    mock.expect_search().times(0);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        send_text(&event_tx, "in").await;
        event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('u'),
                KeyModifiers::CONTROL,
            ))))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        event_tx.send(Ok(ctrl_c())).await.unwrap();
    });

    let state = run_loop_with_events(
        &mut terminal,
        AppState::new(SearchConfig::default()),
        Arc::new(mock),
        Duration::from_millis(200),
        event_rx,
    )
    .await
    .unwrap();
    feeder.await.unwrap();

    assert_eq!(state.page.last_change, "");
    assert!(state.page.selected.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_initial_value_is_rendered_without_lookup() {
    let mut mock = MockSymbolLookup::new();
    mock.expect_search().times(0);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);
    let feeder = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(600)).await;
        event_tx.send(Ok(ctrl_c())).await.unwrap();
    });

    let config = SearchConfig {
        initial_value: "infy".to_string(),
        ..SearchConfig::default()
    };
    let state = run_loop_with_events(
        &mut terminal,
        AppState::new(config),
        Arc::new(mock),
        Duration::from_millis(200),
        event_rx,
    )
    .await
    .unwrap();
    feeder.await.unwrap();

    assert!(state.search.is_none());
    assert!(screen_text(&terminal).contains("INFY"));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockSymbolLookup::new();
    mock.expect_search().returning(|query, market| {
        if query.contains('Z') {
            return Err(LookupError::Transport("connection reset".to_string()));
        }
        Ok((0..query.len() % 12)
            .map(|i| SymbolMatch::new(format!("{query}{i}.NS"), "Fuzz Ltd", market))
            .collect())
    });

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=30 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield so timers and lookups get to interleave with input
            if rng.gen_bool(0.1) {
                tokio::time::sleep(Duration::from_millis(rng.gen_range(0..5))).await;
            }
        }
        let _ = event_tx.send(Ok(ctrl_c())).await;
    });

    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(
            &mut terminal,
            AppState::new(SearchConfig::default()),
            Arc::new(mock),
            Duration::from_millis(1),
            event_rx,
        ),
    )
    .await;

    let state = match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    };
    assert!(state.should_quit);
    assert!(state.page.listeners.is_empty());
    assert!(state.search.is_none());

    fuzzer_handle.await.unwrap();
}

#[tokio::test]
async fn test_effects_release_cancels_timer() {
    let mock = MockSymbolLookup::new();
    let (tx, mut rx) = mpsc::channel(4);
    let mut effects = Effects::new(Arc::new(mock), Duration::from_millis(10), tx);
    let mut state = AppState::new(SearchConfig::default());

    effects.apply(&mut state, Command::ScheduleLookup("HDFC".to_string()));
    assert!(effects.debouncer.is_pending());
    effects.apply(&mut state, Command::ReleaseAll);
    assert!(!effects.debouncer.is_pending());

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(rx.try_recv().is_err());
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Ctrl+C would end the run early
    if rng.gen_bool(0.1) && code != KeyCode::Char('c') {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
