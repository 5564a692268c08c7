use crate::app::geometry::result_window;
use crate::app::state::PanelView;
use crate::components::helpers::truncate;
use crate::domain::models::SymbolMatch;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Width reserved for the symbol column.
const SYMBOL_WIDTH: usize = 14;

/// The floating result list under the search field.
pub struct SymbolPanel<'a> {
    pub view: PanelView<'a>,
    pub theme: &'a Theme,
    pub frame_count: u64,
}

impl Widget for SymbolPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.panel_border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = match self.view {
            PanelView::NoResults { query } => vec![Line::from(Span::styled(
                format!(" NO RESULTS FOR \"{query}\""),
                self.theme.panel_empty,
            ))],
            PanelView::Results {
                rows,
                offset,
                highlighted,
                loading,
            } => {
                let width = inner.width as usize;
                let mut lines: Vec<Line> = rows
                    .iter()
                    .enumerate()
                    .skip(offset)
                    .take(result_window(inner.height, loading))
                    .map(|(i, row)| result_line(row, highlighted == Some(i), width, self.theme))
                    .collect();
                if loading {
                    let spinner = glyphs::SPINNER[(self.frame_count as usize) % glyphs::SPINNER.len()];
                    lines.push(Line::from(Span::styled(
                        format!(" {spinner} SEARCHING..."),
                        self.theme.panel_loading,
                    )));
                }
                lines
            }
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

fn result_line<'a>(row: &'a SymbolMatch, highlighted: bool, width: usize, theme: &Theme) -> Line<'a> {
    let tag = row.market.tag();
    let symbol = format!(" {:<SYMBOL_WIDTH$}", truncate(row.display_symbol(), SYMBOL_WIDTH));
    let name_width = width.saturating_sub(symbol.chars().count() + tag.len() + 2);
    let name = truncate(&row.display_name, name_width);
    let padding = width.saturating_sub(symbol.chars().count() + name.chars().count() + tag.len() + 1);

    let line = Line::from(vec![
        Span::styled(symbol, theme.panel_symbol),
        Span::styled(name, theme.panel_name),
        Span::raw(" ".repeat(padding)),
        Span::styled(tag, theme.panel_tag),
        Span::raw(" "),
    ]);
    if highlighted {
        line.style(theme.highlight)
    } else {
        line.style(Style::default())
    }
}
