use log::{debug, info};

use crate::document::{Document, ShapeId};
use crate::input::{FrameInput, Hotkey};
use crate::palette::{BACKGROUND, PaletteColor};
use crate::renderer::Canvas;
use crate::shape::{ColoredShape, Shape, ShapeKind, factory};

/// Draw gesture state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// The primary button is held and this shape follows the pointer
    Drawing(ColoredShape),
}

/// All mutable state of one drawing session.
///
/// [`SessionState::update`] advances it by one frame of input and
/// [`SessionState::render`] paints it; neither needs a window.
#[derive(Debug)]
pub struct SessionState {
    selected_color: PaletteColor,
    /// `None` means pick mode
    selected_shape_type: Option<ShapeKind>,
    gesture: GestureState,
    selected_shape: Option<ShapeId>,
    document: Document,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(PaletteColor::Red, Some(ShapeKind::Rectangle))
    }
}

impl SessionState {
    pub fn new(selected_color: PaletteColor, selected_shape_type: Option<ShapeKind>) -> Self {
        Self {
            selected_color,
            selected_shape_type,
            gesture: GestureState::Idle,
            selected_shape: None,
            document: Document::new(),
        }
    }

    pub fn selected_color(&self) -> PaletteColor {
        self.selected_color
    }

    pub fn selected_shape_type(&self) -> Option<ShapeKind> {
        self.selected_shape_type
    }

    pub fn is_pick_mode(&self) -> bool {
        self.selected_shape_type.is_none()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn drawing_shape(&self) -> Option<&ColoredShape> {
        match &self.gesture {
            GestureState::Drawing(shape) => Some(shape),
            GestureState::Idle => None,
        }
    }

    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.selected_shape
    }

    /// The selected shape itself
    pub fn selected(&self) -> Option<&ColoredShape> {
        self.selected_shape.and_then(|id| self.document.get(id))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Apply one frame of input
    pub fn update(&mut self, input: &FrameInput) {
        self.apply_color_hotkeys(input);
        self.apply_tool_hotkeys(input);

        if input.hotkey_pressed(Hotkey::Delete) {
            self.delete_selected();
        }

        self.advance_gesture(input);
    }

    fn apply_color_hotkeys(&mut self, input: &FrameInput) {
        let requested = input.hotkeys.iter().rev().find_map(|hotkey| match hotkey {
            Hotkey::Red => Some(PaletteColor::Red),
            Hotkey::Green => Some(PaletteColor::Green),
            Hotkey::Blue => Some(PaletteColor::Blue),
            _ => None,
        });

        if let Some(color) = requested {
            if color != self.selected_color {
                info!("Color selected: {}", color.label());
            }
            self.selected_color = color;
        }
    }

    fn apply_tool_hotkeys(&mut self, input: &FrameInput) {
        let requested = input.hotkeys.iter().rev().find_map(|hotkey| match hotkey {
            Hotkey::Rectangle => Some(Some(ShapeKind::Rectangle)),
            Hotkey::Circle => Some(Some(ShapeKind::Circle)),
            Hotkey::Pick => Some(None),
            _ => None,
        });

        if let Some(tool) = requested {
            self.select_tool(tool);
        }
    }

    /// Switch tool; any actual change drops the selection
    pub fn select_tool(&mut self, tool: Option<ShapeKind>) {
        if tool == self.selected_shape_type {
            return;
        }

        match tool {
            Some(kind) => info!("Tool selected: {}", kind.label()),
            None => info!("Tool selected: pick"),
        }
        self.selected_shape_type = tool;
        self.selected_shape = None;
    }

    /// Remove the selected shape. No-op without a selection.
    pub fn delete_selected(&mut self) -> Option<ColoredShape> {
        let id = self.selected_shape.take()?;
        let removed = self.document.remove(id);
        if removed.is_some() {
            info!("Deleted shape {:?}, {} left", id, self.document.len());
        }
        removed
    }

    fn advance_gesture(&mut self, input: &FrameInput) {
        match &mut self.gesture {
            GestureState::Idle => {
                if !input.primary_pressed || !input.pointer_in_canvas {
                    return;
                }

                match self.selected_shape_type {
                    Some(kind) => {
                        let mut shape = factory::create(kind);
                        shape.set_left_upper(input.pointer_pos);
                        shape.set_color(self.selected_color.color());
                        debug!("Started {} at {:?}", kind.label(), input.pointer_pos);
                        self.gesture = GestureState::Drawing(shape);
                    }
                    None => {
                        self.selected_shape = self.document.topmost_at(input.pointer_pos);
                        debug!("Picked {:?} at {:?}", self.selected_shape, input.pointer_pos);
                    }
                }
            }
            GestureState::Drawing(shape) => {
                if input.primary_down {
                    shape.set_right_lower(input.pointer_pos);
                } else if let GestureState::Drawing(shape) = std::mem::take(&mut self.gesture) {
                    let kind = shape.kind();
                    let id = self.document.add(shape);
                    debug!("Committed {} as {:?}", kind.label(), id);
                }
            }
        }
    }

    /// Paint the frame: background, shapes back-to-front, selection mark,
    /// then the shape being drawn on top.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(BACKGROUND);

        for (_, shape) in self.document.iter() {
            shape.draw(canvas);
        }

        if let Some(selected) = self.selected() {
            selected.draw_selection_mark(canvas);
        }

        if let Some(drawing) = self.drawing_shape() {
            drawing.draw(canvas);
        }
    }
}
