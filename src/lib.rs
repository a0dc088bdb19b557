//! EDDIE Library
//!
//! The portfolio page in the terminal. Startup wiring lives here; the page,
//! form state machine and rendering live in the workspace crates re-exported
//! below.

pub mod startup;

// Re-export crates so the binary and integration tests share one path
pub use eddie_app as app;
pub use eddie_core as core;
pub use eddie_tui as tui;

pub use startup::{build_state, load_catalog, Overrides};
