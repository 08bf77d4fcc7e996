//! Configuration for diff-checker
//!
//! This crate provides:
//! - Config file lookup (working directory, home directory, platform config dir)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, config_dir};
