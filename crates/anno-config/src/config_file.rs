//! Configuration file lookup
//!
//! A config file in the current working directory wins over the one in
//! the user config directory, so per-project overrides stay possible.

use crate::paths::{app_config_path, CONFIG_FILE_NAME};
use std::path::PathBuf;

/// Load the raw config file contents, CWD first, then the config dir
pub fn load_config_file() -> Option<String> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        match std::fs::read_to_string(&local) {
            Ok(content) => {
                log::debug!("using config file from CWD: {}", local.display());
                return Some(content);
            }
            Err(e) => log::warn!("could not read {}: {}", local.display(), e),
        }
    }

    let global = app_config_path().ok()?;
    if global.exists() {
        match std::fs::read_to_string(&global) {
            Ok(content) => {
                log::debug!("using config file: {}", global.display());
                return Some(content);
            }
            Err(e) => log::warn!("could not read {}: {}", global.display(), e),
        }
    }

    None
}
