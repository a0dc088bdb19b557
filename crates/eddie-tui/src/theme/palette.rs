//! Color palette for the EDDIE page.
//!
//! Five system colors carry the whole design: black background, white text,
//! green accent, red warnings and gray structure.

use ratatui::style::Color;

// --- System colors ---
pub const SYS_BLACK: Color = Color::Rgb(5, 5, 5);
pub const SYS_WHITE: Color = Color::Rgb(224, 224, 224);
pub const SYS_GREEN: Color = Color::Rgb(0, 255, 65);
pub const SYS_RED: Color = Color::Rgb(255, 51, 51);
pub const SYS_GRAY: Color = Color::Rgb(51, 51, 51);

// --- Background layers ---
pub const DEEPEST_BG: Color = SYS_BLACK;
pub const CARD_BG: Color = Color::Rgb(14, 14, 14);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(70, 70, 70);
pub const BORDER_ACTIVE: Color = SYS_GREEN;

// --- Text ---
pub const TEXT_PRIMARY: Color = SYS_WHITE;
pub const TEXT_SECONDARY: Color = Color::Rgb(150, 150, 150);
pub const TEXT_MUTED: Color = Color::Rgb(100, 100, 100);
pub const TEXT_BRIGHT: Color = Color::White;

// --- Accent / status ---
pub const ACCENT: Color = SYS_GREEN;
pub const WARNING: Color = SYS_RED;

/// Foreground for text drawn on a light button background
pub const CONTRAST_FG: Color = SYS_BLACK;
