use egui::Rect;

use super::common::{self, SELECTION_MARK_WIDTH, ShapeGeometry};
use super::{Shape, ShapeKind};
use crate::palette::SELECTION_TINT;
use crate::renderer::Canvas;

/// Axis-aligned filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    geometry: ShapeGeometry,
}

impl Rectangle {
    pub fn new(geometry: ShapeGeometry) -> Self {
        Self { geometry }
    }

    pub fn rect(&self) -> Rect {
        self.geometry.normalized_rect()
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    fn geometry_mut(&mut self) -> &mut ShapeGeometry {
        &mut self.geometry
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect(), self.geometry.color);
    }

    fn draw_selection_mark(&self, canvas: &mut dyn Canvas) {
        // The outline sits inside the bounds, so pull the centered stroke in
        // by half its width.
        let rect = self.rect();
        let inset = (SELECTION_MARK_WIDTH / 2.0)
            .min(rect.width() / 2.0)
            .min(rect.height() / 2.0);
        canvas.stroke_rect(rect.shrink(inset), SELECTION_MARK_WIDTH, SELECTION_TINT);
    }

    fn is_point_inside(&self, point: egui::Pos2) -> bool {
        common::rect_contains(self.rect(), point)
    }
}
