//! eddie-app - Application state and orchestration for the EDDIE portfolio
//!
//! This crate implements the TEA (The Elm Architecture) pattern: the page and
//! contact form state, key handling, the delivery timer and the submission
//! sinks. It knows nothing about the terminal; the TUI crate renders
//! [`AppState`] and feeds [`Message`]s back in.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page_view_state;
pub mod process;
pub mod sink;
pub mod state;

// Re-export primary types
pub use actions::SubmissionScheduler;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use page_view_state::PageViewState;
pub use process::process_message;
pub use sink::{ConfiguredSink, JsonlFileSink, LogSink, SubmissionSink};
pub use state::{AppState, FormFocus, Notice, NoticeLevel, UiMode};

#[cfg(any(test, feature = "test-helpers"))]
pub use sink::RecordingSink;
