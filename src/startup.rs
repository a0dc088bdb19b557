//! Startup: settings, CLI overrides and catalog resolution

use std::path::{Path, PathBuf};

use eddie_app::config::{load_settings, SinkKind};
use eddie_app::state::AppState;
use eddie_core::prelude::*;
use eddie_core::Catalog;

/// Command line values that take precedence over `.eddie/config.toml`
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog: Option<PathBuf>,
    pub sink: Option<SinkKind>,
}

/// Resolve the systems catalog.
///
/// A configured path is loaded relative to `base_dir` and must be valid;
/// without one the built-in listing is used.
pub fn load_catalog(path: Option<&Path>, base_dir: &Path) -> Result<Catalog> {
    match path {
        Some(path) => {
            let path = base_dir.join(path);
            let catalog = Catalog::load(&path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            info!(
                "Using catalog {:?} ({} items)",
                path,
                catalog.item_count()
            );
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Load settings from `base_dir`, apply overrides and build the initial state
pub fn build_state(base_dir: &Path, overrides: Overrides) -> Result<AppState> {
    let mut settings = load_settings(base_dir);

    if let Some(path) = overrides.catalog {
        settings.catalog.path = Some(path);
    }
    if let Some(kind) = overrides.sink {
        settings.sink.kind = kind;
    }
    debug!(
        "Settings: icons={}, smooth_scroll={}, sink={}",
        settings.ui.icons, settings.ui.smooth_scroll, settings.sink.kind
    );

    let catalog = load_catalog(settings.catalog.path.as_deref(), base_dir)?;
    Ok(AppState::with_settings(settings, catalog))
}
