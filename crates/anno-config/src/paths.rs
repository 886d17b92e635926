//! Configuration and data directory paths
//!
//! Uses XDG directories via the `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/anno-task-tui/`, `~/.cache/anno-task-tui/`
//! - macOS: `~/Library/Application Support/anno-task-tui/`, `~/Library/Caches/anno-task-tui/`
//! - Windows: `%APPDATA%\anno-task-tui\`, `%LOCALAPPDATA%\anno-task-tui\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "anno-task-tui";

/// Name of the configuration file looked up in the CWD and config dir
pub const CONFIG_FILE_NAME: &str = "anno-task-tui.toml";

/// Get the application config directory, creating it if necessary
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if necessary
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the path of the app config file inside the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
