use crate::app::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn items(&self) -> Vec<FooterItem> {
        let item = |key, desc| FooterItem { key, desc };
        match self.state.page.focus {
            Focus::Search if self.state.is_mounted() => {
                let open = self
                    .state
                    .search
                    .as_ref()
                    .is_some_and(|s| s.overlay.is_open());
                if open {
                    vec![
                        item("\u{2191}/\u{2193}", "move"),
                        item("Enter", "pick"),
                        item("Esc", "close"),
                        item("^C", "quit"),
                    ]
                } else {
                    vec![
                        item("type", "search"),
                        item("Esc", "clear"),
                        item("Tab", "page"),
                        item("^C", "quit"),
                    ]
                }
            }
            _ => vec![
                item("j/k", "scroll"),
                item("Tab", "search"),
                item("q", "quit"),
            ],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for item in self.items() {
            spans.push(Span::styled(format!(" {}", item.key), self.theme.key_binding));
            spans.push(Span::raw(format!(" {} ", item.desc)));
        }

        if let Some(message) = &self.state.page.status_message {
            let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let room = (area.width as usize).saturating_sub(used + message.chars().count() + 1);
            spans.push(Span::raw(" ".repeat(room)));
            spans.push(Span::styled(message.clone(), self.theme.status_info));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::features::search;
    use crate::app::state::SearchConfig;

    fn render(state: &AppState) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            state,
            theme: &theme,
        }
        .render(area, &mut buf);
        (0..80).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut state = AppState::new(SearchConfig::default());
        search::mount(&mut state);
        assert!(render(&state).contains("search"));

        state.page.focus = Focus::Page;
        let text = render(&state);
        assert!(text.contains("j/k"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_status_message_is_shown() {
        let mut state = AppState::new(SearchConfig::default());
        state.page.on_select("SBIN.NS".to_string());
        assert!(render(&state).contains("Selected SBIN.NS"));
    }
}
