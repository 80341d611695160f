//! Settings parser for .lportal/config.toml

use std::path::{Path, PathBuf};

use portal_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const PORTAL_DIR: &str = ".lportal";

/// Path to the config file under a root directory.
fn config_path(root: &Path) -> PathBuf {
    root.join(PORTAL_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.lportal/config.toml` under `root`.
///
/// A missing file yields defaults. A file that exists but does not
/// parse is a recoverable condition: the error is logged and defaults
/// are returned, so a typo in the config never blocks session start.
pub fn load_settings(root: &Path) -> Settings {
    let path = config_path(root);
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str::<Settings>(&raw) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Failed to parse {}: {e}. Using defaults.", path.display());
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {e}. Using defaults.", path.display());
            Settings::default()
        }
    }
}

/// Write settings to `.lportal/config.toml` under `root`, creating the
/// directory if needed.
pub fn save_settings(root: &Path, settings: &Settings) -> Result<()> {
    let dir = root.join(PORTAL_DIR);
    std::fs::create_dir_all(&dir)?;

    let raw = toml::to_string_pretty(settings)
        .map_err(|e| Error::config_invalid(format!("failed to serialize settings: {e}")))?;
    std::fs::write(config_path(root), raw)?;
    Ok(())
}
