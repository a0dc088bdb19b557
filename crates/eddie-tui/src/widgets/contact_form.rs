//! Contact form: three boxed text areas and the submit button, or the
//! "transmission received" panel once a submission has been sent.

use eddie_app::state::{AppState, FormFocus, UiMode};
use eddie_core::content::{
    REQUIRED_FIELD_HINT, RESET_LABEL, SENDING_LABEL, SENT_BODY, SENT_HEADLINE, SUBMIT_LABEL,
};
use eddie_core::{FieldName, SubmissionStatus};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::text::{boxed, center_padding, display_width, pad_to, styled_line, wrap};
use crate::theme::{icons::IconSet, styles};

/// Caret drawn after the text of the focused field
pub const CARET: &str = "▌";

const SENT_PANEL_ROWS: usize = 9;

pub struct ContactFormView<'a> {
    state: &'a AppState,
    icons: IconSet,
}

/// Color a field uses for its label and its focused border
fn field_color(field: FieldName) -> Style {
    match field {
        FieldName::Intent => styles::accent(),
        FieldName::Failure => styles::warning(),
        FieldName::Reality => styles::text_primary(),
    }
}

impl<'a> ContactFormView<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn in_form(&self) -> bool {
        self.state.ui_mode == UiMode::Form
    }

    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        match self.state.form.status() {
            SubmissionStatus::Sent => self.sent_panel(width),
            SubmissionStatus::Idle | SubmissionStatus::Sending => {
                let mut lines = Vec::new();
                for field in FieldName::ALL {
                    lines.extend(self.field_lines(field, width));
                    lines.push(Line::default());
                }
                lines.extend(self.submit_button(width));
                lines
            }
        }
    }

    fn field_lines(&self, field: FieldName, width: usize) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(4);
        let focused = self.state.focused_field() == Some(field);
        let invalid = self.state.invalid_field == Some(field);
        let value = self.state.form.value(field);

        let border = if focused {
            field_color(field)
        } else if invalid {
            styles::warning()
        } else {
            styles::border_inactive()
        };

        let caret = Span::styled(CARET, styles::accent());
        let mut rows: Vec<Line<'static>> = if value.is_empty() {
            let placeholder = wrap(field.placeholder(), inner.saturating_sub(1))
                .into_iter()
                .next()
                .unwrap_or_default();
            let mut spans = Vec::new();
            if focused {
                spans.push(caret);
            }
            spans.push(Span::styled(placeholder, styles::text_muted()));
            vec![Line::from(spans)]
        } else {
            // Keep the tail in view while typing past the box height
            let wrapped = wrap(value, inner.saturating_sub(1));
            let skip = wrapped.len().saturating_sub(usize::from(field.rows()));
            let mut rows: Vec<Line<'static>> = wrapped
                .into_iter()
                .skip(skip)
                .map(|text| styled_line(text, styles::text_primary()))
                .collect();
            if let (true, Some(last)) = (focused, rows.last_mut()) {
                last.spans.push(caret);
            }
            rows
        };
        rows.resize(usize::from(field.rows()), Line::default());

        let label_style = field_color(field).add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line<'static>> = wrap(&field.label().to_uppercase(), width)
            .into_iter()
            .map(|row| styled_line(row, label_style))
            .collect();
        lines.extend(boxed(rows, width, border));
        if invalid {
            lines.push(styled_line(
                format!("! {}", REQUIRED_FIELD_HINT),
                styles::warning(),
            ));
        }
        lines
    }

    fn submit_button(&self, width: usize) -> Vec<Line<'static>> {
        let sending = self.state.form.status().is_sending();
        let label = if sending {
            SENDING_LABEL.to_string()
        } else {
            format!("{} {}", SUBMIT_LABEL, self.icons.arrow_right())
        };

        let style = if sending {
            styles::button_disabled()
        } else if self.in_form() && self.state.form_focus == FormFocus::SubmitButton {
            styles::button_focused()
        } else {
            styles::button()
        };

        let pad = center_padding(display_width(&label), width);
        let centered = pad_to(&format!("{}{}", " ".repeat(pad), label), width);
        vec![
            styled_line(" ".repeat(width), style),
            styled_line(centered, style),
            styled_line(" ".repeat(width), style),
        ]
    }

    fn sent_panel(&self, width: usize) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(4);
        let centered = |text: &str, style: Style| -> Vec<Line<'static>> {
            wrap(text, inner)
                .into_iter()
                .map(|row| {
                    let pad = center_padding(display_width(&row), inner);
                    Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(row, style)])
                })
                .collect()
        };

        let reset_style = if self.in_form() {
            styles::button_focused()
        } else {
            styles::text_primary().add_modifier(Modifier::UNDERLINED)
        };

        let mut rows = vec![Line::default(), Line::default()];
        rows.extend(centered(SENT_HEADLINE, styles::accent_bold()));
        rows.extend(centered(SENT_BODY, styles::text_secondary()));
        rows.push(Line::default());
        rows.extend(centered(RESET_LABEL, reset_style));
        let height = rows.len().max(SENT_PANEL_ROWS - 2);
        rows.resize(height, Line::default());

        boxed(rows, width, styles::border_inactive())
    }
}
