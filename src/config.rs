use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::PaletteColor;
use crate::shape::ShapeKind;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "PAINT_THAT_THINGY_CONFIG";

/// Slowest frame rate accepted from a config file
pub const MIN_TARGET_FPS: f32 = 1.0;

const DEFAULT_TARGET_FPS: f32 = 60.0;

/// Startup settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    /// Inner window size in points
    pub window_size: [f32; 2],
    pub target_fps: f32,
    pub initial_color: PaletteColor,
    /// `null` starts in pick mode
    pub initial_tool: Option<ShapeKind>,
    pub show_status_bar: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Paint-That-Thingy".to_owned(),
            window_size: [800.0, 450.0],
            target_fps: DEFAULT_TARGET_FPS,
            initial_color: PaletteColor::Red,
            initial_tool: Some(ShapeKind::Rectangle),
            show_status_bar: true,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or use defaults when it is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {:?}", path);
                Self::load(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_fps.is_finite() || self.target_fps < MIN_TARGET_FPS {
            return Err(ConfigError::InvalidFps(self.target_fps));
        }

        let [width, height] = self.window_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }

        Ok(())
    }

    /// Time between repaints. An unusable `target_fps` falls back to the default rate.
    pub fn frame_interval(&self) -> Duration {
        let fps = if self.target_fps.is_finite() && self.target_fps >= MIN_TARGET_FPS {
            self.target_fps
        } else {
            DEFAULT_TARGET_FPS
        };
        Duration::from_secs_f32(1.0 / fps)
    }
}
