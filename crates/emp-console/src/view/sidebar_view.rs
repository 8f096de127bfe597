//! Sidebar View
//!
//! Navigation over the console panels, session footer with logout.

use crate::theme::{SIDEBAR_ACTIVE, SIDEBAR_FILL};
use crate::viewmodel::MenuViewModel;
use eframe::egui::{self, Button, Color32, RichText, Vec2};
use emp_core::domain::{ConsolePanel, Session};

const SIDEBAR_WIDTH: f32 = 230.0;

pub fn render_sidebar(ctx: &egui::Context, vm: &mut MenuViewModel, session: &Session) {
    egui::SidePanel::left("console_sidebar")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .frame(egui::Frame::none().fill(SIDEBAR_FILL).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Employee Management")
                    .size(17.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.label(RichText::new("System").size(12.0).color(Color32::LIGHT_GRAY));
            ui.add_space(20.0);

            for panel in ConsolePanel::ALL {
                let active = vm.active == panel;
                let fill = if active { SIDEBAR_ACTIVE } else { Color32::TRANSPARENT };
                let button = ui.add(
                    Button::new(RichText::new(panel.label()).size(14.0).color(Color32::WHITE))
                        .fill(fill)
                        .rounding(6.0)
                        .min_size(Vec2::new(ui.available_width(), 34.0)),
                );
                if button.clicked() {
                    vm.select(panel);
                }
                ui.add_space(4.0);
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                let logout = ui.add(
                    Button::new(RichText::new("Logout").color(Color32::WHITE))
                        .fill(Color32::from_rgb(185, 28, 28))
                        .rounding(6.0)
                        .min_size(Vec2::new(ui.available_width(), 32.0)),
                );
                if logout.clicked() {
                    vm.request_logout();
                }
                ui.add_space(8.0);
                ui.label(RichText::new(&session.role).size(11.0).color(Color32::LIGHT_GRAY));
                ui.label(
                    RichText::new(&session.username)
                        .size(13.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.separator();
            });
        });
}
