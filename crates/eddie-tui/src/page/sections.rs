//! Bodies of the page sections, laid out at the body width the section
//! wrapper leaves them.

use eddie_app::state::AppState;
use eddie_core::content::{
    AUDIENCE, CAPABILITIES, CONTACT_HEADLINE, CONTACT_PITCH, DELIVERABLES, DELIVERABLE_CLOSING,
    DELIVERABLE_INTRO, DONT_DO, DONT_DO_CLOSING, DONT_DO_INTRO, DONT_DO_LEAD, FILTER_NOTICE,
    FOOTER, HERO, NOT_AUDIENCE, NOT_AUDIENCE_TITLE, PRINCIPLES, SYSTEMS_LEAD,
    SYSTEMS_LEAD_ACCENT, SYSTEMS_WARNING, SYSTEMS_WARNING_LABEL, WHAT_I_DO_CLOSING,
    WHAT_I_DO_INTRO, WHAT_I_DO_LEAD,
};
use eddie_core::PageSection;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, styles};
use crate::widgets::banner::banner;
use crate::widgets::text::{
    boxed, center_padding, columns, display_width, styled_line, wrap,
};
use crate::widgets::{ContactFormView, DeliverableCard, SystemCard, TerminalBlock, Tone};

/// Two-column grids need at least this much body width
const TWO_COLUMN_MIN: usize = 60;
/// Deliverable cards sit three abreast from this width
const THREE_COLUMN_MIN: usize = 66;
/// The contact pitch moves beside the form from this width
const CONTACT_SPLIT_MIN: usize = 90;

const COLUMN_GAP: usize = 3;
const ACCENT_RULE: &str = "┃ ";

pub(super) fn body(
    section: PageSection,
    state: &AppState,
    icons: IconSet,
    width: usize,
) -> Vec<Line<'static>> {
    match section {
        PageSection::Hero => hero(width),
        PageSection::WhatIDo => what_i_do(width),
        PageSection::HowIWork => how_i_work(width),
        PageSection::SystemsIndex => systems_index(state, icons, width),
        PageSection::WhatIDontDo => what_i_dont_do(width),
        PageSection::WhoThisIsFor => who_this_is_for(width),
        PageSection::Deliverable => deliverable(icons, width),
        PageSection::Contact => contact(state, icons, width),
    }
}

/// Wrapped paragraph, one style for every row
fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|row| styled_line(row, style))
        .collect()
}

/// Wrapped paragraph behind a vertical accent rule
fn ruled(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    prefix_rule(paragraph(text, width.saturating_sub(2), style))
}

fn prefix_rule(lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::styled(ACCENT_RULE, styles::accent())];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// Wrapped paragraph centered in `width`
fn centered(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|row| {
            let pad = center_padding(display_width(&row), width);
            Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(row, style)])
        })
        .collect()
}

fn half(width: usize) -> usize {
    width.saturating_sub(COLUMN_GAP) / 2
}

// ─────────────────────────────────────────────────────────────────────────────
// Hero
// ─────────────────────────────────────────────────────────────────────────────

fn hero(width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match banner(HERO.name) {
        Some(rows) if rows.iter().all(|row| display_width(row) <= width) => {
            lines.extend(rows.into_iter().map(|row| styled_line(row, styles::text_bold())));
        }
        _ => lines.push(styled_line(HERO.name, styles::text_bold())),
    }
    lines.push(Line::default());
    lines.extend(paragraph(HERO.role, width, styles::text_secondary()));
    lines.push(Line::default());

    lines.extend(ruled(HERO.tagline, width, styles::text_primary()));
    lines.push(Line::default());
    lines.extend(paragraph(HERO.statement, width, styles::text_primary()));
    lines.extend(paragraph(HERO.warning, width, styles::warning_bold()));
    lines.push(Line::default());
    for rule in HERO.rules {
        lines.extend(paragraph(rule, width, styles::text_muted()));
    }
    lines.push(Line::default());

    let button = format!(" {} ", HERO.call_to_action.to_uppercase());
    let mut spans = vec![Span::styled(button.clone(), styles::button())];
    let hint = "  press c";
    if display_width(&button) + display_width(hint) <= width {
        spans.push(Span::styled(hint, styles::text_muted()));
    }
    lines.push(Line::from(spans));
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// What I Do
// ─────────────────────────────────────────────────────────────────────────────

fn what_i_do(width: usize) -> Vec<Line<'static>> {
    let mut lines = paragraph(WHAT_I_DO_LEAD, width, styles::text_bold());
    lines.push(Line::default());
    lines.extend(paragraph(
        &WHAT_I_DO_INTRO.to_uppercase(),
        width,
        styles::text_muted(),
    ));
    lines.push(Line::default());

    if width >= TWO_COLUMN_MIN {
        let (left, right) = CAPABILITIES.split_at(CAPABILITIES.len().div_ceil(2));
        let column = half(width);
        lines.extend(columns(
            vec![
                (
                    TerminalBlock::new(left.iter().copied())
                        .tone(Tone::Success)
                        .lines(column),
                    column,
                ),
                (
                    TerminalBlock::new(right.iter().copied())
                        .tone(Tone::Success)
                        .lines(column),
                    column,
                ),
            ],
            COLUMN_GAP,
        ));
    } else {
        lines.extend(
            TerminalBlock::new(CAPABILITIES)
                .tone(Tone::Success)
                .lines(width),
        );
    }
    lines.push(Line::default());

    let inner = width.saturating_sub(4);
    let mut closing = paragraph(WHAT_I_DO_CLOSING[0], inner, styles::text_primary());
    closing.extend(paragraph(WHAT_I_DO_CLOSING[1], inner, styles::text_bold()));
    lines.extend(boxed(closing, width, styles::border_inactive()));
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// How I Work
// ─────────────────────────────────────────────────────────────────────────────

fn how_i_work(width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, principle) in PRINCIPLES.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let inner = if principle.emphasized {
            width.saturating_sub(2)
        } else {
            width
        };

        let mut block = paragraph(principle.title, inner, styles::text_bold());
        for summary in principle.summary {
            block.extend(paragraph(summary, inner, styles::text_primary()));
        }
        for bullet in principle.bullets {
            block.extend(paragraph(
                &format!("  - {}", bullet),
                inner,
                styles::warning(),
            ));
        }
        for detail in principle.details {
            block.extend(paragraph(
                &detail.to_uppercase(),
                inner,
                styles::text_muted(),
            ));
        }

        if principle.emphasized {
            lines.extend(prefix_rule(block));
        } else {
            lines.extend(block);
        }
    }

    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems Index
// ─────────────────────────────────────────────────────────────────────────────

fn systems_index(state: &AppState, icons: IconSet, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if display_width(SYSTEMS_LEAD) + 1 + display_width(SYSTEMS_LEAD_ACCENT) <= width {
        lines.push(Line::from(vec![
            Span::styled(SYSTEMS_LEAD, styles::text_primary()),
            Span::raw(" "),
            Span::styled(SYSTEMS_LEAD_ACCENT, styles::accent()),
        ]));
    } else {
        lines.extend(paragraph(SYSTEMS_LEAD, width, styles::text_primary()));
        lines.extend(paragraph(SYSTEMS_LEAD_ACCENT, width, styles::accent()));
    }

    for category in state.catalog.categories() {
        lines.push(Line::default());
        lines.push(styled_line("─".repeat(width), styles::border_inactive()));
        lines.extend(paragraph(
            &category.category.to_uppercase(),
            width,
            styles::accent_bold(),
        ));
        lines.push(Line::default());

        if width >= TWO_COLUMN_MIN {
            let column = half(width);
            for (i, pair) in category.items.chunks(2).enumerate() {
                if i > 0 {
                    lines.push(Line::default());
                }
                let cells = pair
                    .iter()
                    .map(|item| (SystemCard::new(item).lines(column), column))
                    .collect();
                lines.extend(columns(cells, COLUMN_GAP));
            }
        } else {
            for (i, item) in category.items.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::default());
                }
                lines.extend(SystemCard::new(item).lines(width));
            }
        }
    }

    lines.push(Line::default());
    let inner = width.saturating_sub(4);
    let mut warning = paragraph(
        &format!("{} {}", icons.warning(), SYSTEMS_WARNING_LABEL),
        inner,
        styles::warning_bold(),
    );
    warning.extend(paragraph(SYSTEMS_WARNING, inner, styles::warning()));
    lines.extend(boxed(warning, width, styles::warning()));
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// What I Don't Do
// ─────────────────────────────────────────────────────────────────────────────

fn what_i_dont_do(width: usize) -> Vec<Line<'static>> {
    let refusals = |width: usize| {
        let mut lines = paragraph(DONT_DO_LEAD, width, styles::text_bold());
        lines.push(Line::default());
        lines.extend(paragraph(DONT_DO_INTRO, width, styles::text_muted()));
        lines.push(Line::default());
        lines.extend(
            TerminalBlock::new(DONT_DO)
                .tone(Tone::Warning)
                .marker("x")
                .lines(width),
        );
        lines
    };
    let closing = |width: usize| {
        let inner = width.saturating_sub(4);
        let mut rows = paragraph(DONT_DO_CLOSING[0], inner, styles::text_primary());
        rows.push(Line::default());
        rows.extend(paragraph(
            DONT_DO_CLOSING[1],
            inner,
            styles::text_bold().add_modifier(Modifier::UNDERLINED),
        ));
        boxed(rows, width, styles::border_inactive())
    };

    if width >= TWO_COLUMN_MIN {
        let column = half(width);
        columns(
            vec![(refusals(column), column), (closing(column), column)],
            COLUMN_GAP,
        )
    } else {
        let mut lines = refusals(width);
        lines.push(Line::default());
        lines.extend(closing(width));
        lines
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Who This Is For
// ─────────────────────────────────────────────────────────────────────────────

fn who_this_is_for(width: usize) -> Vec<Line<'static>> {
    let audience = |width: usize| {
        TerminalBlock::new(AUDIENCE)
            .tone(Tone::Success)
            .marker("+")
            .lines(width)
    };
    let not_audience = |width: usize| {
        TerminalBlock::new(NOT_AUDIENCE)
            .title(NOT_AUDIENCE_TITLE)
            .tone(Tone::Warning)
            .marker("x")
            .lines(width)
    };

    let mut lines = if width >= TWO_COLUMN_MIN {
        let column = half(width);
        columns(
            vec![(audience(column), column), (not_audience(column), column)],
            COLUMN_GAP,
        )
    } else {
        let mut lines = audience(width);
        lines.push(Line::default());
        lines.extend(not_audience(width));
        lines
    };

    lines.push(Line::default());
    let inner = width.saturating_sub(4);
    let notice = centered(&FILTER_NOTICE.to_uppercase(), inner, styles::text_muted());
    lines.extend(boxed(notice, width, styles::border_inactive()));
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// Deliverable
// ─────────────────────────────────────────────────────────────────────────────

fn deliverable(icons: IconSet, width: usize) -> Vec<Line<'static>> {
    let mut lines = paragraph(DELIVERABLE_INTRO, width, styles::text_primary());
    lines.push(Line::default());

    let cards: Vec<DeliverableCard> = DELIVERABLES
        .iter()
        .map(|deliverable| DeliverableCard::new(deliverable, icons))
        .collect();

    if width >= THREE_COLUMN_MIN {
        let column = width.saturating_sub(2 * COLUMN_GAP) / 3;
        let label_rows = cards
            .iter()
            .map(|card| card.label_rows(column))
            .max()
            .unwrap_or(1);
        let cells = cards
            .iter()
            .map(|card| (card.lines(column, label_rows), column))
            .collect();
        lines.extend(columns(cells, COLUMN_GAP));
    } else {
        for card in &cards {
            lines.extend(card.lines(width, 1));
        }
    }
    lines.push(Line::default());

    let last = DELIVERABLE_CLOSING.len() - 1;
    let mut closing = Vec::new();
    for (i, text) in DELIVERABLE_CLOSING.iter().enumerate() {
        let style = if i == last {
            styles::accent_bold()
        } else {
            styles::text_bold()
        };
        closing.extend(paragraph(&text.to_uppercase(), width.saturating_sub(2), style));
    }
    lines.extend(prefix_rule(closing));
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────────────────────────

fn contact(state: &AppState, icons: IconSet, width: usize) -> Vec<Line<'static>> {
    let pitch = |width: usize| {
        let mut lines = paragraph(
            &CONTACT_HEADLINE[0].to_uppercase(),
            width,
            styles::text_bold(),
        );
        lines.extend(paragraph(
            &CONTACT_HEADLINE[1].to_uppercase(),
            width,
            styles::text_muted().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::default());
        lines.extend(paragraph(CONTACT_PITCH, width, styles::text_primary()));
        lines
    };
    let form = ContactFormView::new(state, icons);

    if width >= CONTACT_SPLIT_MIN {
        let left = width * 2 / 5;
        let right = width - left - COLUMN_GAP;
        columns(
            vec![(pitch(left), left), (form.lines(right), right)],
            COLUMN_GAP,
        )
    } else {
        let mut lines = pitch(width);
        lines.push(Line::default());
        lines.extend(form.lines(width));
        lines
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Footer
// ─────────────────────────────────────────────────────────────────────────────

pub(super) fn footer(width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![styled_line("─".repeat(width), styles::border_inactive())];
    lines.push(Line::default());
    lines.extend(centered(FOOTER, width, styles::text_muted()));
    lines.push(Line::default());
    lines
}
