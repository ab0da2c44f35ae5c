// src/ui/palette.rs
use egui::Color32;

pub const MEDICAL_BLUE: Color32 = Color32::from_rgb(0x4A, 0x90, 0xD9);
pub const DEEP_NAVY: Color32 = Color32::from_rgb(0x1B, 0x3A, 0x5C);
pub const TEAL: Color32 = Color32::from_rgb(0x2E, 0x9E, 0x9E);
pub const MED_GRAY: Color32 = Color32::from_rgb(0x8E, 0x99, 0xA4);
pub const SUCCESS: Color32 = Color32::from_rgb(0x34, 0xC7, 0x59);
pub const ERROR: Color32 = Color32::from_rgb(0xFF, 0x3B, 0x30);
pub const DIVIDER: Color32 = Color32::from_rgb(0xE2, 0xE8, 0xF0);

pub fn from_rgb(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Versión translúcida para fondos (equivale al sufijo "18"/"15" en hex).
pub fn tint(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
