//! Load bar: `[███░░]` with the filled cells colored by tier.

use eddie_core::load::{EMPTY_CELL, FILLED_CELL};
use eddie_core::LoadBar;
use ratatui::text::Span;

use crate::theme::styles;

/// Rendered width including the brackets
pub const LOAD_BAR_COLUMNS: usize = eddie_core::LOAD_BAR_WIDTH as usize + 2;

/// Spans for a load bar, ready to append to a line
pub fn load_bar_spans(bar: &LoadBar) -> Vec<Span<'static>> {
    let filled: String = std::iter::repeat(FILLED_CELL)
        .take(usize::from(bar.filled))
        .collect();
    let empty: String = std::iter::repeat(EMPTY_CELL)
        .take(usize::from(bar.empty))
        .collect();

    vec![
        Span::styled("[", styles::text_muted()),
        Span::styled(filled, styles::load_tier(bar.tier)),
        Span::styled(empty, styles::text_muted()),
        Span::styled("]", styles::text_muted()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;
    use eddie_core::render_load;

    #[test]
    fn test_spans_match_display() {
        for load in 0..=5 {
            let bar = render_load(load).unwrap();
            let text: String = load_bar_spans(&bar)
                .iter()
                .map(|s| s.content.as_ref())
                .collect();
            assert_eq!(text, bar.to_string());
        }
    }

    #[test]
    fn test_filled_cells_use_tier_color() {
        let high = load_bar_spans(&render_load(5).unwrap());
        assert_eq!(high[1].style.fg, Some(palette::SYS_RED));

        let low = load_bar_spans(&render_load(2).unwrap());
        assert_eq!(low[1].style.fg, Some(palette::SYS_GREEN));
        assert_eq!(low[1].content, "██");
        assert_eq!(low[2].content, "░░░");
    }

    #[test]
    fn test_bar_columns() {
        assert_eq!(LOAD_BAR_COLUMNS, 7);
    }
}
