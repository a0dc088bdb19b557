//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Status bar: separator + one row
pub const STATUS_HEIGHT: u16 = 2;

/// Columns kept clear on each side of the page body
pub const PAGE_MARGIN: u16 = 2;

/// Widest the page body grows; wider terminals center it
pub const MAX_PAGE_WIDTH: u16 = 120;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Name and navigation links
    pub header: Rect,

    /// Scrolling page body
    pub page: Rect,

    /// Mode, notices and key hints
    pub status: Rect,
}

/// Split the screen into header, page and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        page: chunks[1],
        status: chunks[2],
    }
}

/// Centered column inside the page area that the document is laid out in
pub fn page_content(area: Rect) -> Rect {
    let width = area
        .width
        .saturating_sub(2 * PAGE_MARGIN)
        .min(MAX_PAGE_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
