//! Configuration file handling for SnapLink
//!
//! Supports JSON and TOML file formats, stored in the platform config
//! directory by default.
//!
//! Configuration is organized into two sections:
//! - Reshaping settings (grid snapping, node avoidance, tool grid overrides)
//! - The diagram's ambient grid

use serde::{Deserialize, Serialize};
use snaplink_core::{Point, Size};
use snaplink_designer::{Grid, ReshapeConfig};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "snaplink";
const CONFIG_FILE: &str = "config.toml";

/// Settings for the reshaping tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReshapeSettings {
    /// Snap dragged handles to the grid
    pub grid_snap_enabled: bool,
    /// Keep orthogonal link segments off avoidable nodes
    pub avoids_nodes: bool,
    /// Tool cell size; the diagram grid is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_cell_size: Option<Size>,
    /// Tool grid origin; the diagram grid is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_origin: Option<Point>,
}

impl Default for ReshapeSettings {
    fn default() -> Self {
        Self {
            grid_snap_enabled: true,
            avoids_nodes: true,
            grid_cell_size: None,
            grid_origin: None,
        }
    }
}

/// The diagram's ambient grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub cell_size: Size,
    pub origin: Point,
}

impl Default for GridSettings {
    fn default() -> Self {
        let grid = Grid::default();
        Self {
            cell_size: grid.cell_size,
            origin: grid.origin,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reshaping: ReshapeSettings,
    pub grid: GridSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, `<config dir>/snaplink/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("platform config directory not found".to_string())
        })?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| SettingsError::SaveError(e.to_string()))?
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let cell = self.grid.cell_size;
        if !cell.is_real() {
            return Err(SettingsError::invalid("grid.cell_size", "must be finite"));
        }
        if cell.width < 0.0 || cell.height < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "grid.cell_size".to_string(),
                value: cell.to_string(),
            }
            .into());
        }
        if !self.grid.origin.is_real() {
            return Err(SettingsError::invalid("grid.origin", "must be finite"));
        }

        // The reshaping overrides must pass the same checks the tool applies.
        self.to_reshape_config()?;
        Ok(())
    }

    /// Reshaping tool settings, with absent overrides left unset
    pub fn to_reshape_config(&self) -> SettingsResult<ReshapeConfig> {
        let r = &self.reshaping;
        Ok(ReshapeConfig::new(
            r.grid_cell_size.unwrap_or(Size::UNSET),
            r.grid_origin.unwrap_or(Point::UNSET),
            r.grid_snap_enabled,
            r.avoids_nodes,
        )?)
    }

    /// The diagram grid described by this config
    pub fn ambient_grid(&self) -> Grid {
        Grid::new(self.grid.cell_size, self.grid.origin)
    }
}
