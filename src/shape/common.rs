use egui::{Color32, Pos2, Rect, Vec2};

use crate::palette::DEFAULT_SHAPE_COLOR;

/// Line width of the selection outline
pub const SELECTION_MARK_WIDTH: f32 = 5.0;

/// Placement and fill shared by every shape variant.
///
/// `size` is signed: dragging up or left of the starting corner produces
/// negative components, and they are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeGeometry {
    pub left_upper: Pos2,
    pub size: Vec2,
    pub color: Color32,
}

impl Default for ShapeGeometry {
    fn default() -> Self {
        Self {
            left_upper: Pos2::ZERO,
            size: Vec2::ZERO,
            color: DEFAULT_SHAPE_COLOR,
        }
    }
}

impl ShapeGeometry {
    pub fn right_lower(&self) -> Pos2 {
        self.left_upper + self.size
    }

    pub fn set_right_lower(&mut self, right_lower: Pos2) {
        self.size = right_lower - self.left_upper;
    }

    /// Bounds with min/max sorted, whatever the sign of `size`
    pub fn normalized_rect(&self) -> Rect {
        Rect::from_two_pos(self.left_upper, self.right_lower())
    }
}

/// Half-open containment: the left and top edges are inside, the right and
/// bottom edges are not.
pub(crate) fn rect_contains(rect: Rect, point: Pos2) -> bool {
    point.x >= rect.min.x && point.x < rect.max.x && point.y >= rect.min.y && point.y < rect.max.y
}
