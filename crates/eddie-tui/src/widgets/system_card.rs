//! Systems index card: name and load bar on the first row, description below,
//! all behind a dim left rule.

use eddie_core::CatalogItem;
use ratatui::text::{Line, Span};

use super::load_bar::{load_bar_spans, LOAD_BAR_COLUMNS};
use super::text::{display_width, wrap};
use crate::theme::styles;

const RULE: &str = "│ ";

pub struct SystemCard<'a> {
    item: &'a CatalogItem,
}

impl<'a> SystemCard<'a> {
    pub fn new(item: &'a CatalogItem) -> Self {
        Self { item }
    }

    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(display_width(RULE));
        let name_width = inner.saturating_sub(LOAD_BAR_COLUMNS + 1);
        let mut lines = Vec::new();

        for (i, row) in wrap(&self.item.name, name_width).into_iter().enumerate() {
            let mut spans = vec![
                Span::styled(RULE, styles::border_inactive()),
                Span::styled(row.clone(), styles::text_bold()),
            ];
            if i == 0 {
                let gap = inner.saturating_sub(display_width(&row) + LOAD_BAR_COLUMNS);
                spans.push(Span::raw(" ".repeat(gap.max(1))));
                spans.extend(load_bar_spans(&self.item.load.bar()));
            }
            lines.push(Line::from(spans));
        }

        for row in wrap(&self.item.description, inner) {
            lines.push(Line::from(vec![
                Span::styled(RULE, styles::border_inactive()),
                Span::styled(row, styles::text_secondary()),
            ]));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddie_core::LoadRating;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn item(name: &str, description: &str, load: i64) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            description: description.to_string(),
            load: LoadRating::new(load).unwrap(),
        }
    }

    #[test]
    fn test_card_right_aligns_load_bar() {
        let item = item("Router", "Moves packets.", 3);
        let lines = texts(&SystemCard::new(&item).lines(30));

        assert_eq!(lines[0], "│ Router               [███░░]");
        assert_eq!(lines[1], "│ Moves packets.");
        assert_eq!(lines[0].chars().count(), 30);
    }

    #[test]
    fn test_card_wraps_description() {
        let item = item("X", "one two three four", 0);
        let lines = texts(&SystemCard::new(&item).lines(12));
        assert_eq!(lines[0], "│ X  [░░░░░]");
        assert_eq!(&lines[1..], ["│ one two", "│ three four"]);
    }
}
