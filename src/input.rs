use egui::{Context, Key, Pos2, Rect};

/// Keyboard shortcuts understood by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hotkey {
    /// R
    Red,
    /// G
    Green,
    /// B
    Blue,
    /// S
    Rectangle,
    /// C
    Circle,
    /// P
    Pick,
    /// Delete
    Delete,
}

impl Hotkey {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::R => Some(Self::Red),
            Key::G => Some(Self::Green),
            Key::B => Some(Self::Blue),
            Key::S => Some(Self::Rectangle),
            Key::C => Some(Self::Circle),
            Key::P => Some(Self::Pick),
            Key::Delete => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn key(self) -> Key {
        match self {
            Self::Red => Key::R,
            Self::Green => Key::G,
            Self::Blue => Key::B,
            Self::Rectangle => Key::S,
            Self::Circle => Key::C,
            Self::Pick => Key::P,
            Self::Delete => Key::Delete,
        }
    }
}

/// Everything the session reads from the input devices during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Hotkeys that went down this frame, in event order. Auto-repeat is not a press.
    pub hotkeys: Vec<Hotkey>,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Primary button is currently held
    pub primary_down: bool,
    /// Pointer position in window coordinates
    pub pointer_pos: Pos2,
    /// Whether `pointer_pos` is within the drawing area
    pub pointer_in_canvas: bool,
}

impl FrameInput {
    /// A quiet frame with the pointer resting at `pos` inside the canvas
    pub fn at(pos: Pos2) -> Self {
        Self {
            pointer_pos: pos,
            pointer_in_canvas: true,
            ..Default::default()
        }
    }

    pub fn with_hotkey(mut self, hotkey: Hotkey) -> Self {
        self.hotkeys.push(hotkey);
        self
    }

    /// Primary button goes down this frame (and is held)
    pub fn pressed(mut self) -> Self {
        self.primary_pressed = true;
        self.primary_down = true;
        self
    }

    /// Primary button stays held
    pub fn held(mut self) -> Self {
        self.primary_down = true;
        self
    }

    pub fn outside_canvas(mut self) -> Self {
        self.pointer_in_canvas = false;
        self
    }

    pub fn hotkey_pressed(&self, hotkey: Hotkey) -> bool {
        self.hotkeys.contains(&hotkey)
    }
}

/// Handles converting raw egui input into a [`FrameInput`]
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Pos2,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot this frame's input. `canvas_rect` is the area shapes are drawn in.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> FrameInput {
        ctx.input(|input| {
            // Outside the window egui has no position; keep the last one.
            if let Some(pos) = input.pointer.latest_pos() {
                self.last_pointer_pos = pos;
            }

            let hotkeys = input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => Hotkey::from_key(*key),
                    _ => None,
                })
                .collect();

            FrameInput {
                hotkeys,
                primary_pressed: input.pointer.primary_pressed(),
                primary_down: input.pointer.primary_down(),
                pointer_pos: self.last_pointer_pos,
                pointer_in_canvas: canvas_rect.contains(self.last_pointer_pos),
            }
        })
    }
}
