//! # eddie-core - Core Domain Types
//!
//! Foundation crate for the EDDIE portfolio. Holds everything both page
//! renderers (terminal and browser) share: the systems catalog, load ratings,
//! page structure and copy, and the contact form state machine.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Catalog (`catalog`, `load`)
//! - [`Catalog`] - Ordered categories of systems, built in or loaded from TOML
//! - [`LoadRating`] - Validated `0..=5` rating
//! - [`render_load()`] - Derive a [`LoadBar`] with its [`LoadTier`]
//!
//! ### Page (`page`, `content`)
//! - [`PageSection`] - Fixed section order
//! - [`Anchor`] - In-page navigation targets
//! - [`NAV_LINKS`] - Header navigation
//!
//! ### Contact Form (`form`)
//! - [`ContactForm`] - Field values and [`SubmissionStatus`]
//! - [`reduce()`] - Pure transition function returning a [`FormEffect`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum organized by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use eddie_core::prelude::*;
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod form;
pub mod load;
#[cfg(feature = "logging")]
pub mod logging;
pub mod page;

/// Prelude for common imports used throughout all EDDIE crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use catalog::{Catalog, CatalogItem, ContentCategory};
pub use error::{Error, Result, ResultExt};
pub use form::{
    reduce, ContactFields, ContactForm, FieldName, FormEffect, FormEvent, Submission,
    SubmissionId, SubmissionStatus, Transition, SUBMISSION_DELAY,
};
pub use load::{render_load, LoadBar, LoadRating, LoadTier, LOAD_BAR_WIDTH};
pub use page::{Anchor, NavLink, PageSection, NAV_LINKS};
