//! Configuration types for EDDIE
//!
//! Defines:
//! - `Settings` - Contents of `.eddie/config.toml`
//! - `UiSettings`, `SinkSettings`, `CatalogSettings` - Its sections

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global settings from `.eddie/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub sink: SinkSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Icon rendering mode.
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs; needs a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Ease anchor navigation over several frames instead of jumping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            smooth_scroll: true,
        }
    }
}

/// Where accepted contact submissions go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Record a diagnostic log line (default)
    #[default]
    Log,
    /// Append one JSON line per submission to `sink.path`
    File,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkKind::Log => write!(f, "log"),
            SinkKind::File => write!(f, "file"),
        }
    }
}

impl std::str::FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "log" => Ok(SinkKind::Log),
            "file" => Ok(SinkKind::File),
            other => Err(format!("unknown sink '{other}' (expected 'log' or 'file')")),
        }
    }
}

/// Submission sink settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SinkSettings {
    #[serde(default)]
    pub kind: SinkKind,

    /// JSONL file for the `file` sink, relative to the working directory
    #[serde(default = "default_sink_path")]
    pub path: PathBuf,
}

impl Default for SinkSettings {
    fn default() -> Self {
        Self {
            kind: SinkKind::default(),
            path: default_sink_path(),
        }
    }
}

fn default_sink_path() -> PathBuf {
    PathBuf::from(".eddie").join("submissions.jsonl")
}

/// Alternate systems catalog
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// TOML catalog replacing the built-in listing
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}
