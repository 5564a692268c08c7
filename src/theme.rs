use ratatui::style::{Color, Modifier, Style};

pub mod glyphs {
    pub const SEP_RIGHT: &str = "\u{e0b0}";
    pub const PROMPT: &str = "> ";
    pub const SPINNER: &[&str] = &["|", "/", "-", "\\"];
    pub const BULLET: &str = "\u{2022}";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_market: Style,
    pub header: Style,
    pub footer: Style,
    pub key_binding: Style,
    pub status_info: Style,

    pub body_text: Style,
    pub body_title: Style,
    pub body_dim: Style,
    pub history_symbol: Style,

    pub field_text: Style,
    pub field_placeholder: Style,
    pub field_hint: Style,

    pub panel_border: Style,
    pub panel_symbol: Style,
    pub panel_name: Style,
    pub panel_tag: Style,
    pub panel_loading: Style,
    pub panel_empty: Style,

    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Cyan),

            header_logo: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header_market: Style::default().bg(Color::Rgb(60, 60, 60)).fg(Color::Yellow),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            key_binding: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default().fg(Color::Green),

            body_text: Style::default().fg(Color::Rgb(180, 180, 180)),
            body_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            body_dim: Style::default().fg(Color::Rgb(100, 100, 100)),
            history_symbol: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),

            field_text: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            field_placeholder: Style::default().fg(Color::Rgb(100, 100, 100)),
            field_hint: Style::default().fg(Color::Rgb(130, 130, 130)),

            panel_border: Style::default().fg(Color::Cyan),
            panel_symbol: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            panel_name: Style::default().fg(Color::Rgb(200, 200, 200)),
            panel_tag: Style::default().fg(Color::Rgb(130, 130, 130)),
            panel_loading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
            panel_empty: Style::default().fg(Color::Rgb(200, 150, 100)), // Warm tan/orange

            highlight: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .add_modifier(Modifier::BOLD),
        }
    }
}
