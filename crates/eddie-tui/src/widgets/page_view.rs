//! Scrolling viewport over a composed [`PageDocument`].

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::page::PageDocument;

pub struct PageView<'a> {
    document: &'a PageDocument,
    offset: usize,
}

impl<'a> PageView<'a> {
    pub fn new(document: &'a PageDocument, offset: usize) -> Self {
        Self { document, offset }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.document.visible(self.offset, usize::from(area.height));
        for (y, line) in (area.y..area.bottom()).zip(rows) {
            buf.set_line(area.x, y, line, area.width);
        }
    }
}
