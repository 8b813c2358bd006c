use egui::{Color32, Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::renderer::Canvas;

mod circle;
mod common;
mod rectangle;

pub use circle::Circle;
pub use common::{SELECTION_MARK_WIDTH, ShapeGeometry};
pub use rectangle::Rectangle;

/// The kinds of shape a user can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }
}

/// Common trait that all shape variants implement
pub trait Shape {
    fn kind(&self) -> ShapeKind;

    fn geometry(&self) -> &ShapeGeometry;

    fn geometry_mut(&mut self) -> &mut ShapeGeometry;

    /// Paint the filled shape
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Paint a thick outline in the selection tint around the shape
    fn draw_selection_mark(&self, canvas: &mut dyn Canvas);

    /// Test if the shape covers the given position
    fn is_point_inside(&self, point: Pos2) -> bool;

    fn left_upper(&self) -> Pos2 {
        self.geometry().left_upper
    }

    fn set_left_upper(&mut self, left_upper: Pos2) {
        self.geometry_mut().left_upper = left_upper;
    }

    fn size(&self) -> Vec2 {
        self.geometry().size
    }

    fn right_lower(&self) -> Pos2 {
        self.geometry().right_lower()
    }

    /// Moves the opposite corner, keeping `left_upper` fixed
    fn set_right_lower(&mut self, right_lower: Pos2) {
        self.geometry_mut().set_right_lower(right_lower);
    }

    fn color(&self) -> Color32 {
        self.geometry().color
    }

    fn set_color(&mut self, color: Color32) {
        self.geometry_mut().color = color;
    }
}

/// Enumeration of all shape variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColoredShape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape for ColoredShape {
    fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(r) => r.kind(),
            Self::Circle(c) => c.kind(),
        }
    }

    fn geometry(&self) -> &ShapeGeometry {
        match self {
            Self::Rectangle(r) => r.geometry(),
            Self::Circle(c) => c.geometry(),
        }
    }

    fn geometry_mut(&mut self) -> &mut ShapeGeometry {
        match self {
            Self::Rectangle(r) => r.geometry_mut(),
            Self::Circle(c) => c.geometry_mut(),
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::Rectangle(r) => r.draw(canvas),
            Self::Circle(c) => c.draw(canvas),
        }
    }

    fn draw_selection_mark(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::Rectangle(r) => r.draw_selection_mark(canvas),
            Self::Circle(c) => c.draw_selection_mark(canvas),
        }
    }

    fn is_point_inside(&self, point: Pos2) -> bool {
        match self {
            Self::Rectangle(r) => r.is_point_inside(point),
            Self::Circle(c) => c.is_point_inside(point),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    /// Create a zero-sized shape of `kind` at the origin in the default color
    pub fn create(kind: ShapeKind) -> ColoredShape {
        create_with_geometry(kind, ShapeGeometry::default())
    }

    pub fn create_with_geometry(kind: ShapeKind, geometry: ShapeGeometry) -> ColoredShape {
        match kind {
            ShapeKind::Rectangle => ColoredShape::Rectangle(Rectangle::new(geometry)),
            ShapeKind::Circle => ColoredShape::Circle(Circle::new(geometry)),
        }
    }
}
