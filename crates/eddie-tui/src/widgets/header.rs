//! Header bar widget
//!
//! Name on the left, numbered navigation links on the right. The links
//! collapse away on terminals too narrow to hold them.

use eddie_core::content::HERO;
use eddie_core::NAV_LINKS;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct MainHeader {
    icons: IconSet,
}

impl MainHeader {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn title_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.dot(), styles::accent()),
            Span::raw(" "),
            Span::styled(HERO.name, styles::text_bold()),
        ])
    }

    /// `[1] WHAT I DO  [2] HOW I WORK  ...`
    fn nav_line() -> Line<'static> {
        let mut spans = Vec::new();
        for (i, link) in NAV_LINKS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled((i + 1).to_string(), styles::keybinding()));
            spans.push(Span::styled("] ", styles::text_muted()));
            let style = if link.highlighted {
                styles::accent()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(link.label.to_uppercase(), style));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.title_line();
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let nav = Self::nav_line();
        let nav_width = nav.width() as u16;
        if title_width + nav_width + 2 <= inner.width {
            let nav_x = inner.x + inner.width - nav_width;
            buf.set_line(nav_x, inner.y, &nav, nav_width);
        }
    }
}
