use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid target FPS: {0} (must be finite and at least 1)")]
    InvalidFps(f32),

    #[error("Invalid window size: {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}

/// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Window error: {0}")]
    Eframe(#[from] eframe::Error),
}
