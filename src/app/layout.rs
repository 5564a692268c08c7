use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Logical row of the search field inside the scrollable page body.
pub const SEARCH_FIELD_ROW: u16 = 1;
pub const SEARCH_FIELD_HEIGHT: u16 = 3;
pub const SEARCH_FIELD_MAX_WIDTH: u16 = 64;
const SEARCH_FIELD_MARGIN: u16 = 2;

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Screen rect of the search field for a page scrolled by `scroll` rows.
/// `None` while any part of the field is scrolled out of the body.
pub fn anchor_rect(body: Rect, scroll: u16) -> Option<Rect> {
    let top = i32::from(body.y) + i32::from(SEARCH_FIELD_ROW) - i32::from(scroll);
    if top < i32::from(body.y) || top + i32::from(SEARCH_FIELD_HEIGHT) > i32::from(body.bottom())
    {
        return None;
    }

    let width = body
        .width
        .saturating_sub(SEARCH_FIELD_MARGIN * 2)
        .min(SEARCH_FIELD_MAX_WIDTH);
    if width == 0 {
        return None;
    }

    Some(Rect::new(
        body.x + SEARCH_FIELD_MARGIN,
        top as u16,
        width,
        SEARCH_FIELD_HEIGHT,
    ))
}
