use crate::domain::models::Market;

pub mod listeners;
pub mod page;
pub mod search;

// Re-exports
pub use listeners::{GlobalEvent, ListenerId, ListenerRegistry};
pub use page::{Focus, PageState};
pub use search::{
    ComponentListeners, OverlayState, PanelView, QueryState, SearchBarState, SearchConfig,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub should_quit: bool,

    // --- Host Page ---
    pub page: PageState,

    // --- Search Field ---
    // Options used when the field mounts; the live state only exists while
    // the field is mounted.
    pub search_config: SearchConfig,
    pub search: Option<SearchBarState>,

    // --- Animation ---
    pub frame_count: u64,
}

impl AppState {
    #[must_use]
    pub fn new(search_config: SearchConfig) -> Self {
        Self {
            search_config,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn market(&self) -> Market {
        self.search
            .as_ref()
            .map_or(self.search_config.market, SearchBarState::market)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.search.is_some()
    }
}
