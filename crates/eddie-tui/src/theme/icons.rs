//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use eddie_app::config::IconMode;
use eddie_core::content::IconKind;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn cpu(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f2db}", // nf-fa-microchip
            IconMode::Unicode => "[C]",
        }
    }

    pub fn terminal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn check_circle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f058}", // nf-fa-check_circle
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn arrow_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f061}", // nf-fa-arrow_right
            IconMode::Unicode => "\u{2192}",   // →
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    /// Status dot next to the name in the header
    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    /// Glyph for a content icon
    pub fn for_kind(&self, kind: IconKind) -> &'static str {
        match kind {
            IconKind::Cpu => self.cpu(),
            IconKind::Terminal => self.terminal(),
            IconKind::CheckCircle => self.check_circle(),
            IconKind::ArrowRight => self.arrow_right(),
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}
