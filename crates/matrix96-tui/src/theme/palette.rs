//! Color palette (slate/blue, matching the grid's default cell colors)

use matrix96_core::Rgb;
use ratatui::style::Color;

/// Canvas behind the cells; translucent cells are blended onto this
pub const CANVAS_RGB: Rgb = Rgb::new(15, 23, 42);

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(2, 6, 23);
pub const CARD_BG: Color = Color::Rgb(15, 23, 42);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85);
pub const BORDER_ACTIVE: Color = Color::Rgb(59, 130, 246);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(96, 165, 250);
/// Hover outline on a cell
pub const HOVER: Color = Color::Rgb(226, 232, 240);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
pub const TEXT_ON_LIGHT: Color = Color::Rgb(15, 23, 42);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
