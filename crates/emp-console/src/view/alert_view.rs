//! Blocking message window

use eframe::egui::{self, Align2, RichText};

/// Shows `message` until acknowledged. Returns true on the frame it is dismissed.
pub fn render_alert(ctx: &egui::Context, message: &str) -> bool {
    let mut dismissed = false;
    egui::Window::new("Message")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(RichText::new(message).size(14.0));
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });
    dismissed
}
