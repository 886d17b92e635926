//! Application configuration
//!
//! Configuration loaded from anno-task-tui.toml.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from anno-task-tui.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Root URL of the annotation server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Annotation export format name as the server knows it
    #[serde(default = "default_export_format")]
    pub export_format: String,

    /// Page size used when listing tasks
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_export_format() -> String {
    "COCO 1.0".to_string()
}

fn default_page_size() -> usize {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
            export_format: default_export_format(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}
