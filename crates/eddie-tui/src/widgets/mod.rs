//! Custom widget components
//!
//! Frame widgets (`MainHeader`, `StatusBar`, `PageView`) implement ratatui's
//! `Widget`. Page components produce styled lines at a given width and are
//! stitched together by [`crate::page::PageDocument`].

pub mod banner;
mod contact_form;
mod deliverable_card;
mod header;
pub mod load_bar;
mod page_view;
pub mod section;
mod status_bar;
mod system_card;
pub mod terminal_block;
pub mod text;

pub use contact_form::{ContactFormView, CARET};
pub use deliverable_card::DeliverableCard;
pub use header::MainHeader;
pub use load_bar::load_bar_spans;
pub use page_view::PageView;
pub use section::Section;
pub use status_bar::StatusBar;
pub use system_card::SystemCard;
pub use terminal_block::{TerminalBlock, Tone};
