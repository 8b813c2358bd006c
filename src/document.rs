use egui::Pos2;

use crate::shape::{ColoredShape, Shape};

/// Identity of a shape inside a [`Document`], never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

/// Every committed shape, in paint order (last is on top)
#[derive(Debug, Default)]
pub struct Document {
    shapes: Vec<(ShapeId, ColoredShape)>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `shape` on top of everything else
    pub fn add(&mut self, shape: ColoredShape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push((id, shape));
        id
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<ColoredShape> {
        let index = self.shapes.iter().position(|(shape_id, _)| *shape_id == id)?;
        Some(self.shapes.remove(index).1)
    }

    pub fn get(&self, id: ShapeId) -> Option<&ColoredShape> {
        self.shapes
            .iter()
            .find(|(shape_id, _)| *shape_id == id)
            .map(|(_, shape)| shape)
    }

    /// Shapes back-to-front
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &ColoredShape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The topmost shape covering `point`
    pub fn topmost_at(&self, point: Pos2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|(_, shape)| shape.is_point_inside(point))
            .map(|(id, _)| *id)
    }
}
