#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;

pub use app::PaintApp;
pub use config::AppConfig;
pub use document::{Document, ShapeId};
pub use error::{AppError, ConfigError};
pub use input::{FrameInput, Hotkey, InputHandler};
pub use palette::PaletteColor;
pub use renderer::{Canvas, DrawCommand, RecordingCanvas};
pub use shape::{ColoredShape, Shape, ShapeKind};
pub use state::{GestureState, SessionState};
