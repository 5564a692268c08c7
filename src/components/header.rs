use crate::domain::models::Market;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub market: Market,
    pub selected: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Separator styles: fg = current segment bg, bg = next segment bg
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let market_bg = self.theme.header_market.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);
        let sep_logo_market = Style::default().fg(logo_bg).bg(market_bg);
        let sep_market_base = Style::default().fg(market_bg).bg(base_bg);

        let mut spans = vec![
            Span::styled(" TICKERSEEK ", self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_market),
            Span::styled(
                format!(" {} {} ", self.market, self.market.tag()),
                self.theme.header_market,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_market_base),
        ];
        if let Some(symbol) = self.selected {
            spans.push(Span::styled(format!(" {symbol}"), self.theme.header));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_shows_market_and_selection() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        Header {
            market: Market::International,
            selected: Some("AAPL"),
            theme: &theme,
        }
        .render(area, &mut buf);
        let text: String = (0..60).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(text.contains("TICKERSEEK"));
        assert!(text.contains("US NYSE/NASDAQ"));
        assert!(text.contains("AAPL"));
    }
}
