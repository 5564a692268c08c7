use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, Widget},
};

/// Highest layer; the symbol panel floats above everything else.
pub const Z_SEARCH_PANEL: u8 = u8::MAX;

type Painter<'a> = Box<dyn FnOnce(Rect, &mut Buffer) + 'a>;

struct Entry<'a> {
    z: u8,
    area: Rect,
    paint: Painter<'a>,
}

/// Top-level surface drawn after all page content.
///
/// Entries are painted in ascending `z` (insertion order breaks ties). Each
/// entry gets its cells cleared first and is clipped to the frame, so
/// nothing placed here can shift or bleed into the page layout.
#[derive(Default)]
pub struct OverlayLayer<'a> {
    entries: Vec<Entry<'a>>,
}

impl<'a> OverlayLayer<'a> {
    pub fn push(&mut self, z: u8, area: Rect, paint: impl FnOnce(Rect, &mut Buffer) + 'a) {
        self.entries.push(Entry {
            z,
            area,
            paint: Box::new(paint),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(mut self, frame_area: Rect, buf: &mut Buffer) {
        self.entries.sort_by_key(|entry| entry.z);
        for entry in self.entries {
            let area = entry.area.intersection(frame_area);
            if area.is_empty() {
                continue;
            }
            Clear.render(area, buf);
            (entry.paint)(area, buf);
        }
    }
}
