//! Configuration for goals-todos
//!
//! This crate provides:
//! - File path utilities for the config directory
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{ApiConfig, AppConfig, ENV_FAILURE_RATE, ENV_LATENCY_MS};
pub use config_file::{load_config_file, LOCAL_CONFIG_FILE};
pub use paths::{app_config_path, config_dir};
