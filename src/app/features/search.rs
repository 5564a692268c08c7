use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    geometry::{self, row_at, MAX_VISIBLE_ROWS},
    state::{
        AppState, Focus, GlobalEvent, ListenerId, ListenerRegistry, OverlayState, SearchBarState,
    },
};
use crate::domain::models::SymbolMatch;
use crate::domain::query::{is_blank, normalize_query};
use ratatui::layout::{Position, Rect};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let commands = match action {
        Action::Mount => mount(state),
        Action::Unmount => unmount(state),
        Action::InsertChar(c) => edit(state, |text| text.push(*c)),
        Action::DeleteChar => edit(state, |text| {
            text.pop();
        }),
        Action::ClearInput => set_input(state, String::new()),
        Action::Escape => escape(state),
        Action::CommitHighlighted => commit_highlighted(state),
        Action::DebounceElapsed(query) => dispatch_lookup(state, query),
        Action::LookupCompleted {
            generation,
            query,
            outcome,
        } => apply_lookup(state, *generation, query, outcome),
        _ => return UpdateResult::NotHandled,
    };
    UpdateResult::Handled(commands)
}

// --- Lifecycle ---

pub fn mount(state: &mut AppState) -> Vec<Command> {
    if state.search.is_some() {
        return Vec::new();
    }
    let mut search = SearchBarState::new(state.search_config.clone());
    search.listeners.pointer_down = Some(state.page.listeners.register(GlobalEvent::PointerDown));
    tracing::info!(target: "search", market = %search.market(), "search field mounted");
    state.search = Some(search);
    state.page.focus = Focus::Search;
    Vec::new()
}

/// Tears the field down. Every listener it registered is handed back and the
/// runtime is told to drop the timer and any in-flight lookup.
pub fn unmount(state: &mut AppState) -> Vec<Command> {
    let Some(mut search) = state.search.take() else {
        return Vec::new();
    };
    let listeners = &mut search.listeners;
    for id in [
        listeners.pointer_down.take(),
        listeners.scroll.take(),
        listeners.resize.take(),
    ]
    .into_iter()
    .flatten()
    {
        state.page.listeners.unregister(id);
    }
    tracing::info!(target: "search", "search field unmounted");
    vec![Command::ReleaseAll]
}

// --- Input & Debounce ---

fn edit(state: &mut AppState, apply: impl FnOnce(&mut String)) -> Vec<Command> {
    let Some(search) = state.search.as_ref() else {
        return Vec::new();
    };
    let mut text = search.query.raw_text.clone();
    apply(&mut text);
    set_input(state, text)
}

/// Replaces the field's text. A blank query closes the panel right away and
/// cancels the pending dispatch; anything else restarts the quiet period.
pub fn set_input(state: &mut AppState, raw: String) -> Vec<Command> {
    let Some(search) = state.search.as_mut() else {
        return Vec::new();
    };
    let normalized = normalize_query(&raw);
    search.query.raw_text = normalized.clone();
    search.query.normalized_text = normalized.clone();
    search.highlighted = None;

    let mut commands = vec![Command::NotifyChange(normalized.clone())];
    if is_blank(&normalized) {
        search.query.debounce_pending = false;
        search.overlay = OverlayState::Closed;
        search.retained.clear();
        search.list_offset = 0;
        commands.push(Command::CancelLookup);
    } else {
        search.query.debounce_pending = true;
        commands.push(Command::ScheduleLookup(normalized));
    }
    sync_overlay_listeners(state);
    commands
}

// --- Request Sequencing ---

fn dispatch_lookup(state: &mut AppState, query: &str) -> Vec<Command> {
    let Some(search) = state.search.as_mut() else {
        return Vec::new();
    };
    if !search.query.debounce_pending || search.query.normalized_text != query {
        tracing::debug!(target: "search", query, "ignoring superseded debounce");
        return Vec::new();
    }

    search.query.debounce_pending = false;
    search.query.generation += 1;
    let previous = search.overlay.visible_results().to_vec();
    search.overlay = OverlayState::Loading { previous };

    let command = Command::Lookup {
        generation: search.query.generation,
        query: query.to_string(),
        market: search.market(),
    };
    tracing::debug!(target: "search", query, generation = search.query.generation, "lookup dispatched");
    sync_overlay_listeners(state);
    vec![command]
}

fn apply_lookup(
    state: &mut AppState,
    generation: u64,
    query: &str,
    outcome: &Result<Vec<SymbolMatch>, String>,
) -> Vec<Command> {
    let Some(search) = state.search.as_mut() else {
        return Vec::new();
    };
    if generation != search.query.generation {
        tracing::debug!(
            target: "search",
            query,
            generation,
            latest = search.query.generation,
            "dropping stale lookup"
        );
        return Vec::new();
    }
    if !search.overlay.is_loading() {
        tracing::debug!(target: "search", query, generation, "panel closed before lookup finished");
        return Vec::new();
    }

    match outcome {
        Ok(results) if !results.is_empty() => {
            search.retained = results.clone();
            search.overlay = OverlayState::OpenWithResults(results.clone());
        }
        Ok(_) => {
            search.retained.clear();
            search.overlay = OverlayState::OpenEmpty;
        }
        Err(err) => {
            tracing::warn!(target: "search", query, %err, "symbol lookup failed");
            search.retained.clear();
            search.overlay = OverlayState::OpenEmpty;
        }
    }
    search.highlighted = None;
    search.list_offset = 0;
    sync_overlay_listeners(state);
    Vec::new()
}

// --- Selection ---

fn commit_highlighted(state: &mut AppState) -> Vec<Command> {
    let choice = state.search.as_ref().and_then(|search| {
        search
            .overlay
            .visible_results()
            .get(search.highlighted.unwrap_or(0))
            .cloned()
    });
    match choice {
        Some(choice) => commit(state, choice),
        None => Vec::new(),
    }
}

/// The only way a symbol leaves the component.
pub fn commit(state: &mut AppState, choice: SymbolMatch) -> Vec<Command> {
    let Some(search) = state.search.as_mut() else {
        return Vec::new();
    };
    let display = choice.display_symbol().to_string();
    search.query.raw_text = display.clone();
    search.query.normalized_text = display;
    search.query.debounce_pending = false;
    search.overlay = OverlayState::Closed;
    search.highlighted = None;
    sync_overlay_listeners(state);
    vec![Command::CancelLookup, Command::NotifySelect(choice.symbol)]
}

fn escape(state: &mut AppState) -> Vec<Command> {
    let Some(search) = state.search.as_ref() else {
        state.page.focus = Focus::Page;
        return Vec::new();
    };
    if search.overlay.is_open() {
        close_overlay(state);
        Vec::new()
    } else if !search.query.raw_text.is_empty() {
        set_input(state, String::new())
    } else {
        state.page.focus = Focus::Page;
        Vec::new()
    }
}

// --- Overlay Open/Close ---

pub fn close_overlay(state: &mut AppState) {
    if let Some(search) = state.search.as_mut() {
        search.overlay = OverlayState::Closed;
        search.highlighted = None;
    }
    sync_overlay_listeners(state);
}

/// Focusing the field brings back the last answer, if there is one.
pub fn focus(state: &mut AppState) {
    state.page.focus = Focus::Search;
    if let Some(search) = state.search.as_mut() {
        if !search.overlay.is_open()
            && !search.retained.is_empty()
            && !is_blank(&search.query.normalized_text)
        {
            search.overlay = OverlayState::OpenWithResults(search.retained.clone());
            search.list_offset = 0;
        }
    }
    sync_overlay_listeners(state);
    track_anchor(state);
}

/// Keeps scroll/resize subscriptions in lockstep with the panel being open.
fn sync_overlay_listeners(state: &mut AppState) {
    let AppState { page, search, .. } = state;
    let Some(search) = search.as_mut() else {
        return;
    };
    let open = search.overlay.is_open();
    let listening = search.listeners.scroll.is_some() || search.listeners.resize.is_some();

    if open && !listening {
        search.listeners.scroll = Some(page.listeners.register(GlobalEvent::Scroll));
        search.listeners.resize = Some(page.listeners.register(GlobalEvent::Resize));
        search.geometry = page.anchor_rect().map(geometry::compute);
    } else if !open && listening {
        release_overlay_listeners(&mut page.listeners, search);
    }
}

fn release_overlay_listeners(registry: &mut ListenerRegistry, search: &mut SearchBarState) {
    for id in [search.listeners.scroll.take(), search.listeners.resize.take()]
        .into_iter()
        .flatten()
    {
        registry.unregister(id);
    }
    search.geometry = None;
}

// --- Global Events ---

/// Scroll and resize reach the field only through its own subscriptions.
pub fn on_viewport_changed(state: &mut AppState, targets: &[ListenerId], event: GlobalEvent) {
    let Some(search) = state.search.as_ref() else {
        return;
    };
    let own = match event {
        GlobalEvent::Scroll => search.listeners.scroll,
        GlobalEvent::Resize => search.listeners.resize,
        GlobalEvent::PointerDown => None,
    };
    if own.is_some_and(|id| targets.contains(&id)) {
        track_anchor(state);
    }
}

fn track_anchor(state: &mut AppState) {
    let anchor = state.page.anchor_rect();
    if let Some(search) = state.search.as_mut() {
        if search.overlay.is_open() {
            search.geometry = anchor.map(geometry::compute);
        }
    }
}

pub fn on_pointer_down(
    state: &mut AppState,
    targets: &[ListenerId],
    column: u16,
    row: u16,
) -> Vec<Command> {
    let Some(search) = state.search.as_ref() else {
        return Vec::new();
    };
    if !search
        .listeners
        .pointer_down
        .is_some_and(|id| targets.contains(&id))
    {
        return Vec::new();
    }
    let position = Position::new(column, row);

    if let Some(panel) = panel_rect(state).filter(|panel| panel.contains(position)) {
        let window = list_window(state);
        let choice = row_at(panel, column, row)
            .filter(|index| *index < window)
            .map(|index| index + search.list_offset)
            .and_then(|index| search.overlay.visible_results().get(index).cloned());
        return match choice {
            Some(choice) => commit(state, choice),
            None => Vec::new(),
        };
    }

    if state
        .page
        .anchor_rect()
        .is_some_and(|anchor| anchor.contains(position))
    {
        focus(state);
        return Vec::new();
    }

    state.page.focus = Focus::Page;
    if search.overlay.is_open() {
        tracing::debug!(target: "search", column, row, "pointer down outside, closing panel");
        close_overlay(state);
    }
    Vec::new()
}

/// Screen area of the floating panel, if it is showing anything.
#[must_use]
pub fn panel_rect(state: &AppState) -> Option<Rect> {
    let search = state.search.as_ref()?;
    let geometry = search.geometry?;
    let rect = geometry.panel_rect(search.panel_rows(), state.page.viewport);
    (!rect.is_empty()).then_some(rect)
}

/// Result rows the panel can show right now, after clipping to the viewport.
#[must_use]
pub fn list_window(state: &AppState) -> usize {
    let loading = state
        .search
        .as_ref()
        .is_some_and(|search| search.overlay.is_loading());
    panel_rect(state)
        .map_or(usize::from(MAX_VISIBLE_ROWS), |panel| {
            geometry::result_window(panel.height.saturating_sub(2), loading)
        })
        .max(1)
}
