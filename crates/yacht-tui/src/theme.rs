//! Color palette and style constants for the yacht search TUI.

use ratatui::style::{Color, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BG: Color = Color::Rgb(12, 18, 28);
pub const C_ACCENT: Color = Color::Rgb(64, 170, 220); // sea blue
pub const C_ERROR: Color = Color::Rgb(255, 80, 80);
pub const C_MUTED: Color = Color::Rgb(72, 84, 100);
pub const C_SEPARATOR: Color = Color::Rgb(36, 46, 60);
pub const C_SECONDARY: Color = Color::Rgb(120, 136, 156);
pub const C_PRIMARY: Color = Color::Rgb(214, 222, 232);
pub const C_SELECTION_BG: Color = Color::Rgb(26, 40, 58);
pub const C_PANEL_BG: Color = Color::Rgb(16, 24, 36);
pub const C_PANEL_BORDER: Color = Color::Rgb(40, 52, 68);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(64, 170, 220);
pub const C_NUMBER_HINT: Color = Color::Rgb(90, 104, 124);
pub const C_INPUT_BG: Color = Color::Rgb(18, 28, 42);
pub const C_INPUT_FG: Color = Color::Rgb(255, 214, 120);
pub const C_PRICE: Color = Color::Rgb(110, 210, 150);
pub const C_LOCATION: Color = Color::Rgb(100, 160, 190);
pub const C_RANGE_BG: Color = Color::Rgb(30, 60, 84);
pub const C_TODAY: Color = Color::Rgb(255, 184, 80);
pub const C_TOAST_INFO: Color = Color::Rgb(80, 160, 220);
pub const C_TOAST_SUCCESS: Color = Color::Rgb(80, 200, 120);
pub const C_TOAST_WARNING: Color = Color::Rgb(255, 184, 80);
pub const C_TOAST_ERROR: Color = Color::Rgb(255, 95, 95);
pub const C_MODE_NORMAL: Color = Color::Rgb(120, 136, 156);
pub const C_MODE_EDIT: Color = Color::Rgb(255, 214, 120);
pub const C_FEATURED: Color = Color::Rgb(255, 210, 50);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

