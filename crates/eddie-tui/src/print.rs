//! Plain-text rendering of the page for `--print`
//!
//! Same layout as the interactive page, without styling or a terminal.

use eddie_app::config::IconMode;
use eddie_app::state::AppState;

use crate::page::PageDocument;
use crate::theme::icons::IconSet;

/// Default width when stdout is not a terminal
pub const DEFAULT_PRINT_WIDTH: usize = 80;

/// Lay the page out at `width` columns and return it as text.
///
/// Nerd Font glyphs are replaced by their Unicode fallbacks so the output
/// reads the same in any viewer.
pub fn print_page(state: &AppState, width: usize) -> String {
    PageDocument::compose(state, IconSet::new(IconMode::Unicode), width).plain_text()
}
