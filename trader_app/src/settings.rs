// trader_app/src/settings.rs

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Bump when you change config schema.
const CONFIG_VERSION: u32 = 1;

pub const CONFIG_ENV: &str = "TRADER_APP_CONFIG";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("window title is empty")]
    EmptyTitle,
    #[error("invalid window geometry {width}x{height}")]
    InvalidGeometry { width: f32, height: f32 },
    #[error("invalid window position ({x}, {y})")]
    InvalidPosition { x: f32, y: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub window_x: f32,
    pub window_y: f32,
    pub resizable: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,

            window_title: "Trader App".to_string(),
            window_width: 600.0,
            window_height: 800.0,
            window_x: 100.0,
            window_y: 100.0,
            resizable: true,
        }
    }
}

impl AppConfig {
    /// `$TRADER_APP_CONFIG`, else `<config dir>/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(p));
        }
        ProjectDirs::from("com", "trader", "trader_app").map(|d| d.config_dir().join("config.json"))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory on this platform; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Missing file means defaults. Unreadable, malformed or invalid files are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config not found; using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("validate config {}", path.display()))?;

        if cfg.version != CONFIG_VERSION {
            tracing::warn!(
                found = cfg.version,
                expected = CONFIG_VERSION,
                "config version mismatch; reading what we understand"
            );
        }
        tracing::info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.window_width) || !ok(self.window_height) {
            return Err(ConfigError::InvalidGeometry {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if !self.window_x.is_finite() || !self.window_y.is_finite() {
            return Err(ConfigError::InvalidPosition {
                x: self.window_x,
                y: self.window_y,
            });
        }
        Ok(())
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        let viewport = egui::ViewportBuilder::default()
            .with_title(self.window_title.clone())
            .with_inner_size([self.window_width, self.window_height])
            .with_position([self.window_x, self.window_y])
            .with_resizable(self.resizable);

        eframe::NativeOptions {
            viewport,
            ..Default::default()
        }
    }
}
