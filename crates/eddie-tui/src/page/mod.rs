//! Page composition
//!
//! The whole portfolio is laid out as one column of styled lines for the
//! current width. The document also records the row where each anchored
//! section starts, which the render pass hands back to
//! [`PageViewState`](eddie_app::PageViewState) for navigation.

mod sections;

use std::collections::HashMap;

use eddie_app::state::AppState;
use eddie_core::{Anchor, PageSection};
use ratatui::text::Line;

use crate::theme::icons::IconSet;
use crate::widgets::Section;

/// Narrowest width the page is laid out at; smaller viewports clip
pub const MIN_PAGE_WIDTH: usize = 24;

/// A laid-out page
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    lines: Vec<Line<'static>>,
    anchors: HashMap<Anchor, usize>,
}

impl PageDocument {
    /// Lay the page out at `width` columns
    pub fn compose(state: &AppState, icons: IconSet, width: usize) -> Self {
        let width = width.max(MIN_PAGE_WIDTH);
        let mut lines = Vec::new();
        let mut anchors = HashMap::new();

        for section in PageSection::ORDER {
            if let Some(anchor) = section.anchor() {
                anchors.insert(anchor, lines.len());
            }
            let wrapper = Section::for_page(section);
            let body = sections::body(section, state, icons, wrapper.body_width(width));
            lines.extend(wrapper.lines(width, body));
        }
        lines.extend(sections::footer(width));

        Self { lines, anchors }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First row of each anchored section
    pub fn anchors(&self) -> &HashMap<Anchor, usize> {
        &self.anchors
    }

    /// Rows `offset..offset + height`, clamped to the document
    pub fn visible(&self, offset: usize, height: usize) -> &[Line<'static>] {
        let start = offset.min(self.lines.len());
        let end = start.saturating_add(height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// The page without styling, one row per line
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let row: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(width: usize) -> PageDocument {
        PageDocument::compose(&AppState::new(), IconSet::default(), width)
    }

    fn row(document: &PageDocument, index: usize) -> String {
        document.lines()[index]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_anchors_follow_section_order() {
        let document = compose(100);
        let anchors = document.anchors();

        assert_eq!(anchors.len(), 4);
        assert!(anchors[&Anchor::WhatIDo] < anchors[&Anchor::HowIWork]);
        assert!(anchors[&Anchor::HowIWork] < anchors[&Anchor::Systems]);
        assert!(anchors[&Anchor::Systems] < anchors[&Anchor::Contact]);
        assert!(anchors[&Anchor::Contact] < document.len());
    }

    #[test]
    fn test_anchor_rows_are_section_dividers() {
        let document = compose(80);
        for anchor in Anchor::ALL {
            let text = row(&document, document.anchors()[&anchor]);
            assert_eq!(text, "─".repeat(80), "{anchor} does not start at a divider");
        }
    }

    #[test]
    fn test_page_contains_every_section_in_order() {
        let text = compose(100).plain_text();
        let markers = [
            "Autonomous Systems Builder",
            "WHAT I DO",
            "HOW I WORK",
            "SYSTEMS INDEX",
            "WHAT I DON'T DO",
            "WHO THIS IS FOR",
            "DELIVERABLE",
            "BUILD THE THING.",
            "EDDIE // SYSTEMS // 2026",
        ];
        let mut from = 0;
        for marker in markers {
            let at = text[from..]
                .find(marker)
                .unwrap_or_else(|| panic!("{marker:?} missing or out of order"));
            from += at + marker.len();
        }
    }

    #[test]
    fn test_every_catalog_item_is_listed() {
        let state = AppState::new();
        let text = PageDocument::compose(&state, IconSet::default(), 120).plain_text();
        for category in state.catalog.categories() {
            assert!(text.contains(&category.category.to_uppercase()));
            for item in &category.items {
                assert!(text.contains(&item.name), "{} missing", item.name);
                assert!(text.contains(&item.load.bar().to_string()));
            }
        }
    }

    #[test]
    fn test_no_row_exceeds_width() {
        for width in [24, 40, 72, 100, 140] {
            let document = compose(width);
            for line in document.lines() {
                assert!(line.width() <= width, "row wider than {width}: {line:?}");
            }
        }
    }

    #[test]
    fn test_tiny_width_is_clamped() {
        let document = compose(5);
        assert!(document.lines().iter().all(|l| l.width() <= MIN_PAGE_WIDTH));
    }

    #[test]
    fn test_visible_clamps_to_document() {
        let document = compose(80);
        assert_eq!(document.visible(0, 10).len(), 10);
        assert_eq!(document.visible(document.len() - 3, 10).len(), 3);
        assert!(document.visible(document.len() + 5, 10).is_empty());
    }
}
