//! Semantic style builders for the EDDIE page.

use eddie_core::LoadTier;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(palette::WARNING)
}

pub fn warning_bold() -> Style {
    Style::default()
        .fg(palette::WARNING)
        .add_modifier(Modifier::BOLD)
}

// --- Key hints ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::ACCENT)
}

// --- Buttons ---

/// Light button, the hero call to action and the submit button
pub fn button() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::SYS_WHITE)
        .add_modifier(Modifier::BOLD)
}

/// Button with keyboard focus
pub fn button_focused() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Submit button while a submission is in flight
pub fn button_disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::SYS_GRAY)
        .add_modifier(Modifier::BOLD)
}

// --- Load bars ---

/// Color of the filled cells for a load tier
pub fn load_tier(tier: LoadTier) -> Style {
    match tier {
        LoadTier::High => Style::default().fg(palette::SYS_RED),
        LoadTier::Medium => Style::default().fg(palette::SYS_WHITE),
        LoadTier::Low => Style::default().fg(palette::SYS_GREEN),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
