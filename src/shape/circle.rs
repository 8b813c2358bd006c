use egui::Pos2;

use super::common::{SELECTION_MARK_WIDTH, ShapeGeometry};
use super::{Shape, ShapeKind};
use crate::palette::SELECTION_TINT;
use crate::renderer::Canvas;

/// Filled circle inscribed in the horizontal extent of its geometry.
///
/// Only `size.x` drives the radius; the vertical extent is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    geometry: ShapeGeometry,
}

impl Circle {
    pub fn new(geometry: ShapeGeometry) -> Self {
        Self { geometry }
    }

    pub fn center(&self) -> Pos2 {
        self.geometry.left_upper + self.geometry.size / 2.0
    }

    /// Signed radius, negative while dragging to the left
    pub fn radius(&self) -> f32 {
        self.geometry.size.x / 2.0
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    fn geometry_mut(&mut self) -> &mut ShapeGeometry {
        &mut self.geometry
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.center(), self.radius().abs(), self.geometry.color);
    }

    fn draw_selection_mark(&self, canvas: &mut dyn Canvas) {
        // One thick ring whose outer edge is the circle itself. Small circles
        // get a thinner ring so it never grows past the radius.
        let radius = self.radius().abs();
        let width = SELECTION_MARK_WIDTH.min(radius);
        canvas.stroke_circle(self.center(), radius - width / 2.0, width, SELECTION_TINT);
    }

    fn is_point_inside(&self, point: Pos2) -> bool {
        self.center().distance(point) <= self.radius().abs()
    }
}
