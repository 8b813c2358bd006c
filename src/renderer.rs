// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Stroke};

/// The drawing primitives the session needs from a 2D backend.
///
/// `egui::Painter` is the production implementation. [`RecordingCanvas`]
/// captures the calls instead of rasterizing them, which lets a whole frame
/// be checked without a window.
pub trait Canvas {
    /// Fill the whole drawable area with `color`
    fn clear(&mut self, color: Color32);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Outline `rect` with a line of `width`, centered on the rect edge
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color32);

    /// Outline a circle with a line of `width`, centered on the radius
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);
}

impl Canvas for Painter {
    fn clear(&mut self, color: Color32) {
        self.rect_filled(self.clip_rect(), 0.0, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.rect_filled(rect, 0.0, color);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.circle_filled(center, radius, color);
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color32) {
        self.rect_stroke(rect, 0.0, Stroke::new(width, color));
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.circle_stroke(center, radius, Stroke::new(width, color));
    }
}

/// A single recorded [`Canvas`] call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Color32),
    FillRect {
        rect: Rect,
        color: Color32,
    },
    FillCircle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    StrokeRect {
        rect: Rect,
        width: f32,
        color: Color32,
    },
    StrokeCircle {
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
    },
}

/// Canvas that stores every call in order
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color32) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color32) {
        self.commands.push(DrawCommand::StrokeRect { rect, width, color });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }
}
