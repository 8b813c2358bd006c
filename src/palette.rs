use egui::Color32;
use serde::{Deserialize, Serialize};

/// Fill color of a freshly created shape before the session assigns one
pub const DEFAULT_SHAPE_COLOR: Color32 = Color32::BLACK;

/// Tint of the selection outline, independent of the shape's own color
pub const SELECTION_TINT: Color32 = Color32::from_rgb(80, 80, 80);

/// Canvas background
pub const BACKGROUND: Color32 = Color32::from_rgb(245, 245, 245);

/// The fixed set of colors a user can draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 3] = [PaletteColor::Red, PaletteColor::Green, PaletteColor::Blue];

    pub fn color(self) -> Color32 {
        match self {
            PaletteColor::Red => Color32::from_rgb(230, 41, 55),
            PaletteColor::Green => Color32::from_rgb(0, 228, 48),
            PaletteColor::Blue => Color32::from_rgb(0, 121, 241),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaletteColor::Red => "Red",
            PaletteColor::Green => "Green",
            PaletteColor::Blue => "Blue",
        }
    }
}

impl From<PaletteColor> for Color32 {
    fn from(color: PaletteColor) -> Self {
        color.color()
    }
}
