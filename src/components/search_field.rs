use crate::app::state::SearchBarState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const CLEAR_HINT: &str = "^U clear ";

/// The text box the floating panel is anchored to.
pub struct SearchField<'a> {
    pub state: &'a SearchBarState,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for SearchField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" SYMBOL ")
            .title(
                Line::from(format!(" {} ", self.state.market().tag()))
                    .style(self.theme.field_hint)
                    .right_aligned(),
            );
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text = &self.state.query.raw_text;
        let mut spans = vec![Span::styled(glyphs::PROMPT, self.theme.field_hint)];
        if text.is_empty() {
            spans.push(Span::styled(
                self.state.config.placeholder.as_str(),
                self.theme.field_placeholder,
            ));
        } else {
            spans.push(Span::styled(text.as_str(), self.theme.field_text));
            let used = glyphs::PROMPT.len() + text.chars().count();
            let room = (inner.width as usize).saturating_sub(used);
            if room > CLEAR_HINT.len() {
                spans.push(Span::raw(" ".repeat(room - CLEAR_HINT.len())));
                spans.push(Span::styled(CLEAR_HINT, self.theme.field_hint));
            }
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

/// Where the terminal cursor goes while the field has focus.
#[must_use]
pub fn cursor_position(state: &SearchBarState, area: Rect) -> Option<Position> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    let offset = (glyphs::PROMPT.len() + state.query.raw_text.chars().count()) as u16;
    let max_x = area.right().saturating_sub(2);
    Some(Position::new(
        area.x.saturating_add(1).saturating_add(offset).min(max_x),
        area.y + 1,
    ))
}
