//! Theme
//!
//! Light visuals with the console's accent colors.

use eframe::egui::{self, Color32, Rounding};

pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
pub const SIDEBAR_FILL: Color32 = Color32::from_rgb(31, 41, 55);
pub const SIDEBAR_ACTIVE: Color32 = Color32::from_rgb(55, 65, 81);
pub const SURFACE: Color32 = Color32::from_rgb(243, 244, 246);
pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = SURFACE;
    visuals.window_rounding = Rounding::same(10.0);
    visuals.selection.bg_fill = ACCENT;
    ctx.set_visuals(visuals);
}
