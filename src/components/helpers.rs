use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Darkens the cells one column right and one row below `area`, clipped to
/// `terminal_area`.
pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let right = Rect {
        x: area.right(),
        y: area.y.saturating_add(1),
        width: 1,
        height: area.height,
    };
    let bottom = Rect {
        x: area.x.saturating_add(1),
        y: area.bottom(),
        width: area.width,
        height: 1,
    };

    for shadow_area in [right, bottom] {
        let shadow_area = shadow_area.intersection(terminal_area);
        for y in shadow_area.top()..shadow_area.bottom() {
            for x in shadow_area.left()..shadow_area.right() {
                let cell = &mut buf[(x, y)];
                cell.set_style(ratatui::style::Style::default().bg(Color::Black));
                cell.set_symbol(" ");
            }
        }
    }
}

/// Cuts `text` to at most `width` characters, marking the cut with `~`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('~');
    out
}
