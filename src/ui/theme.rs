//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(24, 26, 32);
pub const GRID_LINE: Color32 = Color32::from_rgb(235, 235, 240);

// Glyph colors
pub const NOUGHT_COLOR: Color32 = Color32::from_rgb(120, 200, 255);
pub const CROSS_COLOR: Color32 = Color32::from_rgb(255, 170, 90);

// Winning line colors, one per participant
pub const HUMAN_WIN_LINE: Color32 = Color32::from_rgb(255, 255, 255);
pub const COMPUTER_WIN_LINE: Color32 = Color32::from_rgb(255, 99, 71); // Tomato

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

/// Translucent version of a glyph color for the hover preview
pub fn hover_ghost(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

// Sizes
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const WIN_LINE_WIDTH: f32 = 5.0;
pub const GLYPH_SIZE_RATIO: f32 = 0.62;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
