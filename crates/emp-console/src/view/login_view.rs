//! Login View

use crate::theme::{ACCENT, DANGER, MUTED};
use crate::viewmodel::LoginViewModel;
use eframe::egui::{self, Button, Color32, RichText, TextEdit, Vec2};

pub fn render_login(ctx: &egui::Context, vm: &mut LoginViewModel) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(Color32::from_rgb(67, 56, 202))
                .inner_margin(24.0),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                egui::Frame::none()
                    .fill(Color32::WHITE)
                    .rounding(16.0)
                    .inner_margin(28.0)
                    .show(ui, |ui| {
                        ui.set_width(300.0);
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("EMS").size(32.0).strong().color(ACCENT));
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new("Employee Management System")
                                    .size(18.0)
                                    .strong()
                                    .color(Color32::from_rgb(31, 41, 55)),
                            );
                            ui.add_space(24.0);
                        });

                        let mut submit = false;

                        ui.label(RichText::new("Username").size(12.0).strong());
                        ui.add_space(3.0);
                        let username = ui.add_enabled(
                            !vm.is_loading,
                            TextEdit::singleline(&mut vm.username)
                                .hint_text("Enter your username")
                                .desired_width(f32::INFINITY)
                                .margin(Vec2::new(10.0, 8.0)),
                        );
                        submit |= username.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        ui.add_space(12.0);

                        ui.label(RichText::new("Password").size(12.0).strong());
                        ui.add_space(3.0);
                        let password = ui.add_enabled(
                            !vm.is_loading,
                            TextEdit::singleline(&mut vm.password)
                                .hint_text("Enter your password")
                                .password(true)
                                .desired_width(f32::INFINITY)
                                .margin(Vec2::new(10.0, 8.0)),
                        );
                        submit |= password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                        if let Some(err) = &vm.error {
                            ui.add_space(12.0);
                            ui.label(RichText::new(err).size(12.0).color(DANGER));
                        }

                        ui.add_space(20.0);
                        let label = if vm.is_loading { "Signing in..." } else { "Sign In" };
                        let button = ui.add_enabled(
                            !vm.is_loading,
                            Button::new(RichText::new(label).size(15.0).color(Color32::WHITE))
                                .fill(ACCENT)
                                .rounding(8.0)
                                .min_size(Vec2::new(ui.available_width(), 40.0)),
                        );
                        if button.clicked() {
                            submit = true;
                        }

                        if vm.is_loading {
                            ui.add_space(8.0);
                            ui.vertical_centered(|ui| {
                                ui.spinner();
                            });
                        }

                        if submit {
                            vm.login(ctx.clone());
                        }

                        ui.add_space(8.0);
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("Powered by YourCompany").size(11.0).color(MUTED));
                        });
                    });
            });
        });
}
