use super::{
    action::{Action, UpdateResult},
    command::Command,
    features::{navigation, search},
    state::{AppState, GlobalEvent},
};
use chrono::Local;

/// How long a status message stays in the footer.
const STATUS_TTL_SECS: i64 = 5;

pub fn update(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .page
                .status_time
                .is_some_and(|t| (Local::now() - t).num_seconds() >= STATUS_TTL_SECS)
            {
                state.page.status_message = None;
                state.page.status_time = None;
            }
            Vec::new()
        }
        Action::Quit => {
            state.should_quit = true;
            search::unmount(state)
        }

        // --- Page-wide events, forwarded to subscribers ---
        Action::Resize(width, height) => {
            state.page.resize(width, height);
            dispatch_viewport_change(state, GlobalEvent::Resize);
            Vec::new()
        }
        Action::ScrollPageUp(rows) => {
            state.page.scroll_by(-i32::from(rows));
            dispatch_viewport_change(state, GlobalEvent::Scroll);
            Vec::new()
        }
        Action::ScrollPageDown(rows) => {
            state.page.scroll_by(i32::from(rows));
            dispatch_viewport_change(state, GlobalEvent::Scroll);
            Vec::new()
        }
        Action::Wheel { column, row, down } => {
            navigation::wheel(state, column, row, down);
            dispatch_viewport_change(state, GlobalEvent::Scroll);
            Vec::new()
        }
        Action::PointerDown(column, row) => {
            let targets = state.page.listeners.targets(GlobalEvent::PointerDown);
            if targets.is_empty() {
                return Vec::new();
            }
            search::on_pointer_down(state, &targets, column, row)
        }

        other => {
            if let UpdateResult::Handled(commands) = navigation::update(state, &other) {
                return commands;
            }
            match search::update(state, &other) {
                UpdateResult::Handled(commands) => commands,
                UpdateResult::NotHandled => Vec::new(),
            }
        }
    }
}

fn dispatch_viewport_change(state: &mut AppState, event: GlobalEvent) {
    let targets = state.page.listeners.targets(event);
    if !targets.is_empty() {
        search::on_viewport_changed(state, &targets, event);
    }
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
