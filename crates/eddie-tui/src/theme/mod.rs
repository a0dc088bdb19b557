//! Centralized theme for the EDDIE terminal page.
//!
//! This module provides:
//! - `palette`: Raw color constants (the `sys-*` colors of the page)
//! - `styles`: Semantic style builder functions
//! - `icons`: Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
