//! Trajkit Settings Crate
//!
//! Handles generation and export configuration, loaded from and saved to
//! JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
