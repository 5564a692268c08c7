use super::listeners::ListenerRegistry;
use crate::app::layout::{anchor_rect, get_layout};
use chrono::{DateTime, Local};
use ratatui::layout::Rect;

pub const MAX_HISTORY: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search, // Keystrokes edit the search field
    Page,   // Keystrokes scroll the page
}

/// The hosting page: viewport, scroll position, the global listener
/// registry and whatever the search field has reported back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub viewport: Rect,
    pub scroll: u16,
    pub focus: Focus,
    pub listeners: ListenerRegistry,

    // --- Reported by the search field ---
    pub last_change: String,
    pub selected: Option<String>,
    pub history: Vec<String>,
    pub status_message: Option<String>,
    pub status_time: Option<DateTime<Local>>,
}

impl PageState {
    #[must_use]
    pub fn body(&self) -> Rect {
        get_layout(self.viewport).body
    }

    #[must_use]
    pub fn anchor_rect(&self) -> Option<Rect> {
        anchor_rect(self.body(), self.scroll)
    }

    #[must_use]
    pub fn max_scroll(&self) -> u16 {
        crate::components::page_body::content_height(self).saturating_sub(self.body().height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Returns whether the scroll position changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        let changed = target != i32::from(self.scroll);
        self.scroll = target as u16;
        changed
    }

    pub fn on_change(&mut self, text: String) {
        self.last_change = text;
    }

    pub fn on_select(&mut self, symbol: String) {
        tracing::info!(target: "page", %symbol, "symbol selected");
        self.history.retain(|s| s != &symbol);
        self.history.insert(0, symbol.clone());
        self.history.truncate(MAX_HISTORY);
        self.status_message = Some(format!("Selected {symbol}"));
        self.status_time = Some(Local::now());
        self.selected = Some(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_deduped_and_capped() {
        let mut page = PageState::default();
        for i in 0..12 {
            page.on_select(format!("SYM{i}.NS"));
        }
        page.on_select("SYM5.NS".to_string());
        assert_eq!(page.history.len(), MAX_HISTORY);
        assert_eq!(page.history[0], "SYM5.NS");
        assert_eq!(page.history.iter().filter(|s| *s == "SYM5.NS").count(), 1);
        assert_eq!(page.selected.as_deref(), Some("SYM5.NS"));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut page = PageState::default();
        page.resize(80, 12);
        assert!(!page.scroll_by(-3));
        assert_eq!(page.scroll, 0);

        let max = page.max_scroll();
        assert!(max > 0);
        page.scroll_by(1000);
        assert_eq!(page.scroll, max);

        page.resize(80, 200);
        assert_eq!(page.scroll, 0);
    }

    #[test]
    fn test_anchor_tracks_scroll() {
        let mut page = PageState::default();
        page.resize(80, 12);
        let at_top = page.anchor_rect().unwrap();
        page.scroll_by(1);
        let scrolled = page.anchor_rect().unwrap();
        assert_eq!(at_top.y - 1, scrolled.y);
        page.scroll_by(1);
        assert_eq!(page.anchor_rect(), None);
    }
}
