//! Placeholder for panels that are not built yet

use crate::theme::MUTED;
use eframe::egui::{self, RichText};
use emp_core::domain::ConsolePanel;

pub fn render_placeholder(ui: &mut egui::Ui, panel: ConsolePanel) {
    ui.heading(RichText::new(panel.label()).size(26.0).strong());
    ui.add_space(60.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Page Under Progress").size(22.0).strong());
        ui.add_space(6.0);
        ui.label(
            RichText::new("This module is currently being developed.")
                .size(14.0)
                .color(MUTED),
        );
    });
}
