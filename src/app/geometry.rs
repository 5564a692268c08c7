use ratatui::layout::{Position, Rect};

/// Rows between the bottom edge of the anchor and the top of the panel.
pub const PANEL_OFFSET: u16 = 1;
/// Result rows visible at once; the rest scroll.
pub const MAX_VISIBLE_ROWS: u16 = 8;

/// Where the floating panel sits, derived from the anchor's current bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelGeometry {
    pub top: u16,
    pub left: u16,
    pub width: u16,
}

#[must_use]
pub fn compute(anchor: Rect) -> PanelGeometry {
    PanelGeometry {
        top: anchor.bottom().saturating_add(PANEL_OFFSET),
        left: anchor.x,
        width: anchor.width,
    }
}

impl PanelGeometry {
    /// Bordered panel area holding `content_rows` rows, clipped to `viewport`.
    /// Zero-sized when there is nothing to show or no room below the anchor.
    #[must_use]
    pub fn panel_rect(&self, content_rows: u16, viewport: Rect) -> Rect {
        if content_rows == 0 {
            return Rect::default();
        }
        let wanted = Rect::new(
            self.left,
            self.top,
            self.width,
            content_rows.saturating_add(2),
        );
        let clipped = wanted.intersection(viewport);
        if clipped.width < 3 || clipped.height < 3 {
            return Rect::default();
        }
        clipped
    }
}

/// Result rows that fit in a panel whose inner area is `inner_height` tall.
/// The loading row, when present, takes the last line.
#[must_use]
pub fn result_window(inner_height: u16, loading: bool) -> usize {
    usize::from(
        inner_height
            .saturating_sub(u16::from(loading))
            .min(MAX_VISIBLE_ROWS),
    )
}

/// Index of the content row under `(column, row)` inside a bordered panel.
#[must_use]
pub fn row_at(panel: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = Rect::new(
        panel.x.saturating_add(1),
        panel.y.saturating_add(1),
        panel.width.saturating_sub(2),
        panel.height.saturating_sub(2),
    );
    if inner.contains(Position::new(column, row)) {
        Some((row - inner.y) as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_places_panel_below_anchor() {
        let anchor = Rect::new(4, 10, 40, 3);
        let geometry = compute(anchor);
        assert_eq!(
            geometry,
            PanelGeometry {
                top: 14,
                left: 4,
                width: 40
            }
        );
    }

    #[test]
    fn test_compute_follows_anchor() {
        let before = compute(Rect::new(2, 10, 30, 3));
        let after = compute(Rect::new(2, 4, 30, 3));
        assert_eq!(before.top - after.top, 6);
    }

    #[test]
    fn test_panel_rect_is_clipped_to_viewport() {
        let geometry = PanelGeometry {
            top: 20,
            left: 70,
            width: 20,
        };
        let viewport = Rect::new(0, 0, 80, 24);
        let rect = geometry.panel_rect(8, viewport);
        assert_eq!(rect, Rect::new(70, 20, 10, 4));
        assert_eq!(geometry.panel_rect(0, viewport), Rect::default());
    }

    #[test]
    fn test_panel_rect_without_room_is_empty() {
        let geometry = PanelGeometry {
            top: 23,
            left: 0,
            width: 40,
        };
        assert_eq!(
            geometry.panel_rect(3, Rect::new(0, 0, 80, 24)),
            Rect::default()
        );
    }

    #[test]
    fn test_result_window_follows_clipped_height() {
        assert_eq!(result_window(20, false), MAX_VISIBLE_ROWS as usize);
        assert_eq!(result_window(4, false), 4);
        assert_eq!(result_window(4, true), 3);
        assert_eq!(result_window(1, true), 0);
    }

    #[test]
    fn test_row_at_skips_borders() {
        let panel = Rect::new(10, 5, 20, 6);
        assert_eq!(row_at(panel, 11, 6), Some(0));
        assert_eq!(row_at(panel, 15, 9), Some(3));
        assert_eq!(row_at(panel, 10, 6), None);
        assert_eq!(row_at(panel, 15, 5), None);
        assert_eq!(row_at(panel, 15, 10), None);
    }
}
