//! SnapLink Settings Crate
//!
//! Handles configuration files for the reshaping tool and the diagram grid.

pub mod config;
pub mod error;

pub use config::{Config, GridSettings, ReshapeSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
