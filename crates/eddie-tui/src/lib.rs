//! eddie-tui - Terminal UI for the EDDIE portfolio
//!
//! This crate provides the ratatui-based page. It composes the portfolio into
//! styled lines for the current terminal width, draws the header, page and
//! status bar, and drives the eddie-app event loop from crossterm input.

pub mod event;
pub mod layout;
pub mod page;
pub mod print;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use page::PageDocument;
pub use print::print_page;
pub use runner::run;
