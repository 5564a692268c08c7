use super::listeners::ListenerId;
use crate::app::geometry::{PanelGeometry, MAX_VISIBLE_ROWS};
use crate::domain::models::{Market, SymbolMatch};
use crate::domain::query::{is_blank, normalize_query};

/// Options the hosting page passes to the search field.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub initial_value: String,
    pub placeholder: String,
    pub market: Market,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_value: String::new(),
            placeholder: "SEARCH SYMBOL".to_string(),
            market: Market::Domestic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    pub raw_text: String,
    pub normalized_text: String,
    /// Latest issued lookup. Only a completion carrying this value is applied.
    pub generation: u64,
    pub debounce_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    /// Waiting on the current lookup. `previous` keeps whatever rows were on
    /// screen so the list does not flicker while the next answer is pending.
    Loading { previous: Vec<SymbolMatch> },
    OpenWithResults(Vec<SymbolMatch>),
    OpenEmpty,
}

impl OverlayState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, OverlayState::Closed)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, OverlayState::Loading { .. })
    }

    /// Rows currently on screen.
    #[must_use]
    pub fn visible_results(&self) -> &[SymbolMatch] {
        match self {
            OverlayState::OpenWithResults(results) => results,
            OverlayState::Loading { previous } => previous,
            OverlayState::Closed | OverlayState::OpenEmpty => &[],
        }
    }
}

/// Listener ids the component holds on the page registry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentListeners {
    pub pointer_down: Option<ListenerId>,
    pub scroll: Option<ListenerId>,
    pub resize: Option<ListenerId>,
}

/// What the overlay renderer draws for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<'a> {
    Results {
        rows: &'a [SymbolMatch],
        offset: usize,
        highlighted: Option<usize>,
        loading: bool,
    },
    NoResults {
        query: &'a str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBarState {
    pub config: SearchConfig,
    pub query: QueryState,
    pub overlay: OverlayState,
    /// Last applied non-empty answer, used to reopen the panel on focus.
    pub retained: Vec<SymbolMatch>,
    pub highlighted: Option<usize>,
    pub list_offset: usize,
    pub geometry: Option<PanelGeometry>,
    pub listeners: ComponentListeners,
}

impl SearchBarState {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let text = normalize_query(&config.initial_value);
        Self {
            query: QueryState {
                raw_text: text.clone(),
                normalized_text: text,
                ..QueryState::default()
            },
            config,
            overlay: OverlayState::Closed,
            retained: Vec::new(),
            highlighted: None,
            list_offset: 0,
            geometry: None,
            listeners: ComponentListeners::default(),
        }
    }

    #[must_use]
    pub fn market(&self) -> Market {
        self.config.market
    }

    #[must_use]
    pub fn panel_view(&self) -> Option<PanelView<'_>> {
        match &self.overlay {
            OverlayState::Closed => None,
            OverlayState::OpenEmpty if is_blank(&self.query.normalized_text) => None,
            OverlayState::OpenEmpty => Some(PanelView::NoResults {
                query: &self.query.normalized_text,
            }),
            OverlayState::Loading { previous } if previous.is_empty() => None,
            overlay => Some(PanelView::Results {
                rows: overlay.visible_results(),
                offset: self.list_offset,
                highlighted: self.highlighted,
                loading: overlay.is_loading(),
            }),
        }
    }

    /// Content rows of the panel, excluding borders.
    #[must_use]
    pub fn panel_rows(&self) -> u16 {
        match self.panel_view() {
            None => 0,
            Some(PanelView::NoResults { .. }) => 1,
            Some(PanelView::Results { rows, loading, .. }) => {
                let shown = rows.len().min(usize::from(MAX_VISIBLE_ROWS)) as u16;
                shown + u16::from(loading)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(symbol: &str) -> SymbolMatch {
        SymbolMatch::new(symbol, "", Market::Domestic)
    }

    #[test]
    fn test_initial_value_is_normalized() {
        let state = SearchBarState::new(SearchConfig {
            initial_value: "infy".to_string(),
            ..SearchConfig::default()
        });
        assert_eq!(state.query.raw_text, "INFY");
        assert_eq!(state.query.generation, 0);
        assert_eq!(state.overlay, OverlayState::Closed);
    }

    #[test]
    fn test_panel_rows_per_view() {
        let mut state = SearchBarState::new(SearchConfig::default());
        assert_eq!(state.panel_rows(), 0);

        state.overlay = OverlayState::Loading { previous: vec![] };
        assert_eq!(state.panel_rows(), 0);

        state.overlay = OverlayState::Loading {
            previous: vec![m("A.NS"), m("B.NS")],
        };
        assert_eq!(state.panel_rows(), 3);

        state.overlay = OverlayState::OpenWithResults((0..20).map(|i| m(&i.to_string())).collect());
        assert_eq!(state.panel_rows(), MAX_VISIBLE_ROWS);

        state.overlay = OverlayState::OpenWithResults(vec![m("X.NS"); 65_536]);
        assert_eq!(state.panel_rows(), MAX_VISIBLE_ROWS);

        state.query.normalized_text = "ZZZ".to_string();
        state.overlay = OverlayState::OpenEmpty;
        assert_eq!(
            state.panel_view(),
            Some(PanelView::NoResults { query: "ZZZ" })
        );
        assert_eq!(state.panel_rows(), 1);
    }
}
