//! Width-aware text helpers shared by the page components.
//!
//! All widths are terminal columns as measured by `unicode-width`.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedy word wrap to `width` columns.
///
/// Explicit newlines start a new row, words wider than `width` are broken.
/// Always returns at least one (possibly empty) row.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for word in paragraph.split(' ') {
            let word_width = display_width(word);
            let gap = usize::from(row_width > 0);

            if row_width + gap + word_width <= width {
                if gap == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += gap + word_width;
                continue;
            }

            if row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            if word_width <= width {
                row.push_str(word);
                row_width = word_width;
                continue;
            }

            // Hard-break an overlong word
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if row_width + cw > width && row_width > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(c);
                row_width += cw;
            }
        }

        rows.push(row);
    }

    rows
}

/// Pad with spaces on the right to exactly `width` columns, truncating if longer
pub fn pad_to(text: &str, width: usize) -> String {
    let mut out = truncate_to(text, width);
    let used = display_width(&out);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Cut a string down to at most `width` columns
pub fn truncate_to(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out
}

/// Left padding that centers `text_width` columns inside `width`
pub fn center_padding(text_width: usize, width: usize) -> usize {
    width.saturating_sub(text_width) / 2
}

/// Single-span line; the style lives on the span so it survives recomposition
pub fn styled_line(text: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(Span::styled(text.into(), style))
}

/// Pad a styled line with trailing spaces to `width` columns
pub fn pad_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    let used = line.width();
    if used < width {
        line.spans.push(Span::raw(" ".repeat(width - used)));
    }
    line
}

/// Draw a single-line box around rows, padding each row to the inner width
pub fn boxed(rows: Vec<Line<'static>>, width: usize, border: Style) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let bar = "─".repeat(width.saturating_sub(2));
    let mut lines = vec![styled_line(format!("┌{}┐", bar), border)];
    for row in rows {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(pad_line(row, inner).spans);
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(styled_line(format!("└{}┘", bar), border));
    lines
}

/// Lay columns out side by side.
///
/// Each column is `(lines, width)`; shorter columns are padded with blank
/// rows and every cell is padded to its column width.
pub fn columns(cols: Vec<(Vec<Line<'static>>, usize)>, gap: usize) -> Vec<Line<'static>> {
    let rows = cols.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);
    let mut iters: Vec<_> = cols
        .into_iter()
        .map(|(lines, width)| (lines.into_iter(), width))
        .collect();
    let last = iters.len().saturating_sub(1);

    (0..rows)
        .map(|_| {
            let mut spans = Vec::new();
            for (i, (lines, width)) in iters.iter_mut().enumerate() {
                let cell = lines.next().unwrap_or_default();
                if i == last {
                    spans.extend(cell.spans);
                } else {
                    spans.extend(pad_line(cell, *width).spans);
                    spans.push(Span::raw(" ".repeat(gap)));
                }
            }
            Line::from(spans)
        })
        .collect()
}
