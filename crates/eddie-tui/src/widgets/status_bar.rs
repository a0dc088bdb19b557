//! Status bar widget
//!
//! Displays the input mode, the form status while a submission is in
//! flight, the current notice (or key hints) and the scroll position.

use eddie_app::state::{AppState, NoticeLevel, UiMode};
use eddie_core::SubmissionStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::styles;

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("j/k", "scroll"),
    ("1-4", "jump"),
    ("c", "contact"),
    ("q", "quit"),
];

const FORM_HINTS: &[(&str, &str)] = &[
    ("Tab", "next"),
    ("Ctrl+S", "send"),
    ("Esc", "back"),
];

const SENT_HINTS: &[(&str, &str)] = &[("r", "reset"), ("Esc", "back")];

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn mode_indicator(&self) -> Span<'static> {
        match self.state.ui_mode {
            UiMode::Browse => Span::styled("BROWSE", styles::text_secondary()),
            UiMode::Form => Span::styled("FORM", styles::accent_bold()),
        }
    }

    fn form_status(&self) -> Option<Span<'static>> {
        match self.state.form.status() {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some(Span::styled("TRANSMITTING", styles::warning())),
            SubmissionStatus::Sent => Some(Span::styled("SENT", styles::accent())),
        }
    }

    fn hints(&self) -> Vec<Span<'static>> {
        let hints = match self.state.ui_mode {
            UiMode::Browse => BROWSE_HINTS,
            UiMode::Form if self.state.form.status().is_sent() => SENT_HINTS,
            UiMode::Form => FORM_HINTS,
        };

        let mut spans = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        spans
    }

    fn notice_or_hints(&self) -> Vec<Span<'static>> {
        match &self.state.notice {
            Some(notice) => {
                let style = match notice.level {
                    NoticeLevel::Info => styles::text_primary(),
                    NoticeLevel::Error => styles::warning_bold(),
                };
                let mut spans = vec![Span::styled(notice.text.clone(), style)];
                if self.state.ui_mode == UiMode::Browse {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled("Esc", styles::keybinding()));
                    spans.push(Span::styled(" dismiss", styles::text_muted()));
                }
                spans
            }
            None => self.hints(),
        }
    }

    /// `first-last/total` rows of the page in view
    fn position(&self) -> String {
        let page = &self.state.page;
        if page.total_lines == 0 {
            return "0/0".to_string();
        }
        let first = page.offset + 1;
        let last = (page.offset + page.visible_lines).min(page.total_lines);
        format!("{}-{}/{}", first, last, page.total_lines)
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::border_inactive());

        let mut segments = vec![Span::raw(" "), self.mode_indicator()];

        if let Some(status) = self.form_status() {
            segments.push(separator.clone());
            segments.push(status);
        }

        segments.push(separator.clone());
        segments.extend(self.notice_or_hints());

        segments.push(separator);
        segments.push(Span::styled(self.position(), styles::text_muted()));
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border doubles as the separator from the page
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments())).render(inner, buf);
    }
}
