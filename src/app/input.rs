use crate::app::{
    action::Action,
    state::{AppState, Focus},
};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn map_event_to_action(event: Event, app_state: &AppState) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Some(Action::Quit);
            }
            match app_state.page.focus {
                Focus::Search if app_state.is_mounted() => map_search_key(key),
                _ => map_page_key(key, app_state),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_search_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('n') if ctrl => Some(Action::HighlightNext),
        KeyCode::Char('p') if ctrl => Some(Action::HighlightPrev),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::InsertChar(c)),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Down => Some(Action::HighlightNext),
        KeyCode::Up => Some(Action::HighlightPrev),
        KeyCode::Enter => Some(Action::CommitHighlighted),
        KeyCode::Esc => Some(Action::Escape),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        _ => None,
    }
}

fn map_page_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    let page_rows = app_state.page.body().height.saturating_sub(1).max(1);
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollPageDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollPageUp(1)),
        KeyCode::PageDown => Some(Action::ScrollPageDown(page_rows)),
        KeyCode::PageUp => Some(Action::ScrollPageUp(page_rows)),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => Some(Action::ToggleFocus),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<Action> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::PointerDown(column, row)),
        MouseEventKind::Moved => Some(Action::PointerMoved(column, row)),
        MouseEventKind::ScrollDown => Some(Action::Wheel {
            column,
            row,
            down: true,
        }),
        MouseEventKind::ScrollUp => Some(Action::Wheel {
            column,
            row,
            down: false,
        }),
        _ => None,
    }
}
