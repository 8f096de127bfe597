//! Business Details View

use crate::theme::{DANGER, MUTED};
use crate::viewmodel::BusinessViewModel;
use eframe::egui::{self, RichText};

pub fn render_business_details(ui: &mut egui::Ui, vm: &BusinessViewModel) {
    ui.heading(RichText::new("Business Details").size(26.0).strong());
    ui.add_space(16.0);

    if vm.is_loading {
        ui.spinner();
        return;
    }

    if let Some(err) = &vm.error {
        ui.label(RichText::new(err).color(DANGER));
        return;
    }

    if vm.units.is_empty() {
        ui.label(RichText::new("No business units found").color(MUTED));
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("business_grid")
            .striped(true)
            .num_columns(2)
            .spacing([40.0, 10.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Business Code").strong());
                ui.label(RichText::new("Business Name").strong());
                ui.end_row();

                for unit in &vm.units {
                    ui.label(unit.bcode.as_str());
                    ui.label(unit.business_name.as_str());
                    ui.end_row();
                }
            });
    });
}
