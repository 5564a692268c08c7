use crate::app::{
    features::search::panel_rect,
    layout::get_layout,
    state::{AppState, Focus},
};
use crate::components::{
    footer::Footer,
    header::Header,
    helpers::draw_drop_shadow,
    layer::{OverlayLayer, Z_SEARCH_PANEL},
    overlay::SymbolPanel,
    page_body::PageBody,
    search_field::{cursor_position, SearchField},
};
use crate::theme::Theme;
use ratatui::{widgets::Widget, Frame};

pub fn draw(f: &mut Frame, app_state: &AppState, theme: &Theme) {
    let area = f.area();
    let layout = get_layout(area);

    // --- Page ---
    f.render_widget(
        Header {
            market: app_state.market(),
            selected: app_state.page.selected.as_deref(),
            theme,
        },
        layout.header,
    );
    f.render_widget(
        PageBody {
            page: &app_state.page,
            theme,
        },
        layout.body,
    );

    if let (Some(search), Some(anchor)) = (app_state.search.as_ref(), app_state.page.anchor_rect()) {
        let anchor = anchor.intersection(area);
        if !anchor.is_empty() {
            let focused = app_state.page.focus == Focus::Search;
            f.render_widget(
                SearchField {
                    state: search,
                    theme,
                    focused,
                },
                anchor,
            );
            if focused {
                if let Some(position) = cursor_position(search, anchor) {
                    f.set_cursor_position(position);
                }
            }
        }
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // --- Overlay layer, always last ---
    let mut layer = OverlayLayer::default();
    if let (Some(view), Some(panel)) = (
        app_state.search.as_ref().and_then(|s| s.panel_view()),
        panel_rect(app_state),
    ) {
        let frame_count = app_state.frame_count;
        layer.push(Z_SEARCH_PANEL, panel, move |rect, buf| {
            draw_drop_shadow(buf, rect, area);
            SymbolPanel {
                view,
                theme,
                frame_count,
            }
            .render(rect, buf);
        });
    }
    layer.render(area, f.buffer_mut());
}
