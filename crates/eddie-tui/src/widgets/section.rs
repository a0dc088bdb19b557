//! Section wrapper: divider, title rail and body column.
//!
//! On wide terminals the title sits in a rail to the left of the body
//! (a quarter of the width). On narrow ones it stacks above the body.

use eddie_core::PageSection;
use ratatui::text::{Line, Span};

use super::text::{pad_to, styled_line, wrap};
use crate::theme::styles;

/// Below this width the title rail stacks above the body
pub const WIDE_MIN_WIDTH: usize = 72;

const RAIL_MIN: usize = 18;
const RAIL_MAX: usize = 26;

#[derive(Debug, Clone, Copy)]
pub struct Section {
    title: Option<&'static str>,
    top_border: bool,
}

impl Section {
    pub fn new(title: Option<&'static str>) -> Self {
        Self {
            title,
            top_border: true,
        }
    }

    /// Wrapper configured for one of the page's sections
    pub fn for_page(section: PageSection) -> Self {
        Self::new(section.title()).top_border(section.show_top_border())
    }

    pub fn top_border(mut self, top_border: bool) -> Self {
        self.top_border = top_border;
        self
    }

    fn rail_width(&self, width: usize) -> Option<usize> {
        match self.title {
            Some(_) if width >= WIDE_MIN_WIDTH => Some((width / 4).clamp(RAIL_MIN, RAIL_MAX)),
            _ => None,
        }
    }

    /// Columns available to the body at a given page width
    pub fn body_width(&self, width: usize) -> usize {
        width - self.rail_width(width).unwrap_or(0)
    }

    /// Frame a body laid out at [`body_width`](Self::body_width)
    pub fn lines(&self, width: usize, body: Vec<Line<'static>>) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(body.len() + 6);

        if self.top_border {
            lines.push(styled_line("─".repeat(width), styles::border_inactive()));
        }
        lines.push(Line::default());

        match (self.title, self.rail_width(width)) {
            (Some(title), Some(rail)) => {
                let title_rows = wrap(&title.to_uppercase(), rail - 2);
                let rows = body.len().max(title_rows.len());
                let mut body = body.into_iter();
                for i in 0..rows {
                    let label = title_rows.get(i).map(String::as_str).unwrap_or("");
                    let mut spans = vec![Span::styled(pad_to(label, rail), styles::text_bold())];
                    if let Some(line) = body.next() {
                        spans.extend(line.spans);
                    }
                    lines.push(Line::from(spans));
                }
            }
            (Some(title), None) => {
                for row in wrap(&title.to_uppercase(), width) {
                    lines.push(styled_line(row, styles::text_bold()));
                }
                lines.push(Line::default());
                lines.extend(body);
            }
            (None, _) => lines.extend(body),
        }

        lines.push(Line::default());
        lines
    }
}
