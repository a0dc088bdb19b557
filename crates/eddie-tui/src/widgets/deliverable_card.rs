//! Deliverable card: a box with an accent icon above a bold label.

use eddie_core::content::Deliverable;
use ratatui::text::{Line, Span};

use super::text::{pad_to, styled_line, wrap};
use crate::theme::{icons::IconSet, styles};

pub struct DeliverableCard<'a> {
    deliverable: &'a Deliverable,
    icons: IconSet,
}

impl<'a> DeliverableCard<'a> {
    pub fn new(deliverable: &'a Deliverable, icons: IconSet) -> Self {
        Self { deliverable, icons }
    }

    /// Card lines; `label_rows` pads the label so cards in a row line up
    pub fn lines(&self, width: usize, label_rows: usize) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(4);
        let border = styles::border_inactive();
        let row = |content: Span<'static>| {
            Line::from(vec![
                Span::styled("│ ", border),
                content,
                Span::styled(" │", border),
            ])
        };

        let mut lines = vec![styled_line(
            format!("┌{}┐", "─".repeat(width.saturating_sub(2))),
            border,
        )];
        lines.push(row(Span::styled(
            pad_to(self.icons.for_kind(self.deliverable.icon), inner),
            styles::accent_bold(),
        )));
        lines.push(row(Span::raw(" ".repeat(inner))));

        let mut label = wrap(self.deliverable.label, inner);
        label.resize(label.len().max(label_rows), String::new());
        for text in label {
            lines.push(row(Span::styled(pad_to(&text, inner), styles::text_bold())));
        }

        lines.push(styled_line(
            format!("└{}┘", "─".repeat(width.saturating_sub(2))),
            border,
        ));
        lines
    }

    /// Rows the label needs at `width`
    pub fn label_rows(&self, width: usize) -> usize {
        wrap(self.deliverable.label, width.saturating_sub(4)).len()
    }
}
