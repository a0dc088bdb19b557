//! Settings parser for .eddie/config.toml

use super::types::Settings;
use eddie_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const EDDIE_DIR: &str = ".eddie";

const DEFAULT_CONFIG: &str = r#"# EDDIE Configuration

[ui]
icons = "unicode"       # "unicode" or "nerd_fonts"
smooth_scroll = true    # Ease anchor navigation instead of jumping

[sink]
kind = "log"            # "log" or "file"
path = ".eddie/submissions.jsonl"

[catalog]
# path = "catalog.toml" # Replace the built-in systems index
"#;

/// Load settings from `.eddie/config.toml`.
///
/// A missing or unreadable file yields defaults.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = base_dir.join(EDDIE_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.eddie/config.toml` with commented defaults.
///
/// An existing file is left untouched.
pub fn init_config_dir(base_dir: &Path) -> Result<()> {
    let eddie_dir = base_dir.join(EDDIE_DIR);

    if !eddie_dir.exists() {
        std::fs::create_dir_all(&eddie_dir)
            .map_err(|e| Error::config(format!("Failed to create .eddie dir: {}", e)))?;
    }

    let config_path = eddie_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(())
}
