use crate::app::{
    action::{Action, UpdateResult},
    geometry::row_at,
    state::{AppState, Focus, SearchBarState},
};
use ratatui::layout::Position;

use super::search;

/// Page rows moved per wheel notch.
const WHEEL_STEP: i32 = 3;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::HighlightNext => move_highlight(state, true),
        Action::HighlightPrev => move_highlight(state, false),
        Action::PointerMoved(column, row) => hover(state, *column, *row),
        Action::ToggleFocus => match state.page.focus {
            Focus::Search => state.page.focus = Focus::Page,
            Focus::Page => search::focus(state),
        },
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(Vec::new())
}

fn move_highlight(state: &mut AppState, forward: bool) {
    let window = search::list_window(state);
    let Some(search) = state.search.as_mut() else {
        return;
    };
    let len = search.overlay.visible_results().len();
    if len == 0 {
        return;
    }
    let next = match (search.highlighted, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(0), false) => len - 1,
        (Some(i), false) => i - 1,
    };
    search.highlighted = Some(next);
    keep_visible(search, next, window);
}

fn keep_visible(search: &mut SearchBarState, index: usize, window: usize) {
    if index < search.list_offset {
        search.list_offset = index;
    } else if index >= search.list_offset + window {
        search.list_offset = index + 1 - window;
    }
}

fn hover(state: &mut AppState, column: u16, row: u16) {
    let Some(panel) = search::panel_rect(state) else {
        return;
    };
    let window = search::list_window(state);
    let Some(search) = state.search.as_mut() else {
        return;
    };
    if let Some(index) = row_at(panel, column, row)
        .filter(|r| *r < window)
        .map(|r| r + search.list_offset) {
        if index < search.overlay.visible_results().len() {
            search.highlighted = Some(index);
        }
    }
}

/// Wheel over the panel scrolls the result list; anywhere else it scrolls
/// the page.
pub fn wheel(state: &mut AppState, column: u16, row: u16, down: bool) {
    let over_panel = search::panel_rect(state)
        .is_some_and(|panel| panel.contains(Position::new(column, row)));
    if over_panel {
        scroll_list(state, down);
    } else {
        state
            .page
            .scroll_by(if down { WHEEL_STEP } else { -WHEEL_STEP });
    }
}

fn scroll_list(state: &mut AppState, down: bool) {
    let window = search::list_window(state);
    let Some(search) = state.search.as_mut() else {
        return;
    };
    let len = search.overlay.visible_results().len();
    let max_offset = len.saturating_sub(window);
    search.list_offset = if down {
        (search.list_offset + 1).min(max_offset)
    } else {
        search.list_offset.saturating_sub(1)
    };
}
