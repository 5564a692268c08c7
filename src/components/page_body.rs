use crate::app::layout::{SEARCH_FIELD_HEIGHT, SEARCH_FIELD_ROW};
use crate::app::state::PageState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const GUIDE: &[&str] = &[
    "Type a company name or ticker into the field above. Lookups are sent",
    "once you pause typing, and only the answer to the latest query is shown.",
    "",
    "Domestic symbols are listed without their .NS suffix; the full symbol is",
    "what gets recorded when you pick one.",
    "",
    "  Up/Down, Ctrl+N/P   move through the results",
    "  Enter               pick the highlighted result",
    "  Mouse               hover to highlight, click to pick",
    "  Esc                 close the list, press again to clear",
    "  Ctrl+U              clear the field",
    "  Tab                 switch between the field and this page",
    "  j/k, PgUp/PgDn      scroll this page",
    "  q, Ctrl+C           quit",
    "",
    "The result list floats over the page. It stays attached to the field",
    "while the page scrolls and closes when you click anywhere else.",
];

/// Rows above the "recent" section: title, the field's rows, one spacer.
const LEAD_ROWS: usize = (SEARCH_FIELD_ROW + SEARCH_FIELD_HEIGHT + 1) as usize;

/// Total rows of page content, before scrolling.
#[must_use]
pub fn content_height(page: &PageState) -> u16 {
    // heading + entries + spacer + heading + guide
    let rows = LEAD_ROWS + 1 + page.history.len().max(1) + 1 + 1 + GUIDE.len();
    rows as u16
}

/// The scrollable page the search field is embedded in.
pub struct PageBody<'a> {
    pub page: &'a PageState,
    pub theme: &'a Theme,
}

impl PageBody<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        let mut lines = vec![Line::from(Span::styled(" WATCHLIST", theme.body_title))];
        // The field is drawn over these rows.
        lines.resize(LEAD_ROWS, Line::default());

        lines.push(Line::from(Span::styled(" RECENT SELECTIONS", theme.body_title)));
        if self.page.history.is_empty() {
            lines.push(Line::from(Span::styled("   nothing picked yet", theme.body_dim)));
        }
        for symbol in &self.page.history {
            lines.push(Line::from(vec![
                Span::styled(format!("   {} ", glyphs::BULLET), theme.body_dim),
                Span::styled(symbol.clone(), theme.history_symbol),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(" HOW IT WORKS", theme.body_title)));
        lines.extend(
            GUIDE
                .iter()
                .map(|text| Line::from(Span::styled(format!(" {text}"), theme.body_text))),
        );
        lines
    }
}

impl Widget for PageBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .scroll((self.page.scroll, 0))
            .render(area, buf);
    }
}
