//! Terminal-style list block: a colored left rule, an optional uppercase
//! title and marker-prefixed items.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::text::{display_width, wrap};
use crate::theme::{palette, styles};

/// Color of the rule and the items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    #[default]
    Neutral,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Success => styles::accent(),
            Tone::Warning => styles::warning(),
            Tone::Neutral => styles::text_secondary(),
        }
    }

    fn rule_style(self) -> Style {
        match self {
            Tone::Neutral => Style::default().fg(palette::BORDER_DIM),
            tone => tone.style(),
        }
    }
}

const RULE: &str = "▌ ";

#[derive(Debug, Clone)]
pub struct TerminalBlock<'a> {
    title: Option<&'a str>,
    items: Vec<&'a str>,
    tone: Tone,
    marker: &'static str,
}

impl<'a> TerminalBlock<'a> {
    pub fn new(items: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            title: None,
            items: items.into_iter().collect(),
            tone: Tone::default(),
            marker: ">",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Item prefix, `>` unless overridden
    pub fn marker(mut self, marker: &'static str) -> Self {
        self.marker = marker;
        self
    }

    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let rule = Span::styled(RULE, self.tone.rule_style());
        let prefix_width = display_width(RULE) + display_width(self.marker) + 1;
        let item_width = width.saturating_sub(prefix_width);
        let mut lines = Vec::new();

        if let Some(title) = self.title {
            for row in wrap(&title.to_uppercase(), width.saturating_sub(display_width(RULE))) {
                lines.push(Line::from(vec![
                    rule.clone(),
                    Span::styled(row, styles::text_bold()),
                ]));
            }
            lines.push(Line::from(vec![rule.clone()]));
        }

        for item in &self.items {
            for (i, row) in wrap(item, item_width).into_iter().enumerate() {
                let marker = if i == 0 {
                    Span::styled(format!("{} ", self.marker), styles::text_muted())
                } else {
                    Span::raw(" ".repeat(display_width(self.marker) + 1))
                };
                lines.push(Line::from(vec![
                    rule.clone(),
                    marker,
                    Span::styled(row, self.tone.style()),
                ]));
            }
        }

        lines
    }
}
