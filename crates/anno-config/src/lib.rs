//! Configuration and file management for anno-task-tui
//!
//! This crate provides:
//! - XDG directory helpers for config and cache files
//! - Configuration file lookup (CWD first, then the config directory)
//! - Application configuration (AppConfig) loaded from TOML

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
