//! Employees View
//!
//! Directory table with search, the add form window, the unsaved-changes
//! prompt and the details drawer.

use crate::theme::{ACCENT, DANGER, MUTED, SUCCESS};
use crate::viewmodel::EmployeeViewModel;
use eframe::egui::{self, Align2, Button, Color32, ComboBox, RichText, TextEdit, Vec2};
use emp_core::domain::{Role, Session};

const DETAILS_WIDTH: f32 = 440.0;

// ============================================================================
// DIRECTORY TABLE
// ============================================================================

pub fn render_employees(ui: &mut egui::Ui, vm: &mut EmployeeViewModel) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Employees").size(26.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let add = ui.add(
                Button::new(RichText::new("Add Employee").color(Color32::WHITE))
                    .fill(ACCENT)
                    .rounding(8.0)
                    .min_size(Vec2::new(130.0, 34.0)),
            );
            if add.clicked() {
                vm.open_add_form();
            }
        });
    });
    ui.add_space(12.0);

    ui.add(
        TextEdit::singleline(&mut vm.search)
            .hint_text("Search by name, username, email, or phone...")
            .desired_width(f32::INFINITY)
            .margin(Vec2::new(10.0, 8.0)),
    );
    ui.add_space(12.0);

    if vm.is_loading {
        ui.spinner();
        return;
    }

    if let Some(err) = &vm.load_error {
        ui.label(RichText::new(err).color(DANGER));
        return;
    }

    let mut opened = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("employees_grid")
            .striped(true)
            .num_columns(6)
            .spacing([24.0, 10.0])
            .show(ui, |ui| {
                for title in ["First Name", "Last Name", "Username", "BCode", "Email", "Phone"] {
                    ui.label(RichText::new(title).strong());
                }
                ui.end_row();

                for employee in vm.visible_employees() {
                    if ui.link(employee.first_name.as_str()).clicked() {
                        opened = Some(employee.clone());
                    }
                    ui.label(employee.last_name.as_str());
                    ui.label(employee.username.as_str());
                    ui.label(employee.business_codes_display());
                    ui.label(employee.email.as_deref().unwrap_or("-"));
                    ui.label(employee.phone.as_str());
                    ui.end_row();
                }
            });

        if vm.visible_employees().is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new("No employees found").color(MUTED));
        }
    });

    if let Some(employee) = opened {
        vm.open_details(&employee);
    }
}

// ============================================================================
// DETAILS DRAWER
// ============================================================================

pub fn render_employee_details(ctx: &egui::Context, vm: &mut EmployeeViewModel, session: &Session) {
    let Some(details) = vm.details.clone() else {
        return;
    };
    let businesses = vm.businesses.clone();
    let roles = vm.roles.clone();
    let employee = details.employee;

    egui::SidePanel::right("employee_details")
        .exact_width(DETAILS_WIDTH)
        .resizable(false)
        .frame(egui::Frame::none().fill(Color32::WHITE).inner_margin(20.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(employee.full_name()).size(22.0).strong());
                    ui.label(RichText::new(&employee.username).color(MUTED));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("✕").clicked() {
                        vm.close_details();
                    }
                });
            });
            ui.add_space(10.0);

            let editing = vm.details.as_ref().is_some_and(|d| d.changes.is_some());
            if editing {
                ui.horizontal(|ui| {
                    let save = ui.add_enabled(
                        !vm.is_saving,
                        Button::new(RichText::new("Save Changes").color(Color32::WHITE)).fill(SUCCESS),
                    );
                    if save.clicked() {
                        vm.submit_edit(ctx.clone(), session);
                    }
                    if ui.button("Cancel").clicked() {
                        vm.cancel_edit();
                    }
                    if vm.is_saving {
                        ui.spinner();
                    }
                });
            } else if !employee.is_admin() {
                let edit = ui.add(
                    Button::new(RichText::new("Edit Details").color(Color32::WHITE))
                        .fill(ACCENT)
                        .min_size(Vec2::new(ui.available_width(), 32.0)),
                );
                if edit.clicked() {
                    vm.start_edit();
                }
            }
            ui.add_space(14.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        let picture = if employee.profile_picture.is_some() {
                            "Profile picture on file"
                        } else {
                            "No profile picture"
                        };
                        ui.label(RichText::new(picture).strong());
                        ui.label(
                            RichText::new("Profile picture will be captured from punching app")
                                .size(11.0)
                                .color(MUTED),
                        );
                    });
                });
                ui.add_space(12.0);

                ui.label(RichText::new("Employee Details").size(16.0).strong());
                ui.add_space(6.0);

                match vm.details.as_mut().and_then(|d| d.changes.as_mut()) {
                    Some(changes) => {
                        field_edit(ui, "First Name", &mut changes.first_name);
                        field_edit(ui, "Last Name", &mut changes.last_name);
                        field_read(ui, "Username", &employee.username);
                        ui.label(
                            RichText::new("Changing a name regenerates the username")
                                .size(11.0)
                                .color(MUTED),
                        );
                        field_edit(ui, "Email", &mut changes.email);

                        let mut phone = changes.phone.clone();
                        field_edit(ui, "Phone", &mut phone);
                        if phone != changes.phone {
                            changes.set_phone(&phone);
                        }

                        ui.label(RichText::new("Role").size(12.0).color(MUTED));
                        role_picker(ui, "edit_role", &roles, &mut changes.role);
                        ui.add_space(6.0);

                        ui.label(RichText::new("Business Codes").size(12.0).color(MUTED));
                        for unit in &businesses {
                            let mut checked = changes.bcode.contains(&unit.bcode);
                            if ui.checkbox(&mut checked, unit.label()).changed() {
                                changes.toggle_business_code(&unit.bcode);
                            }
                        }
                    }
                    None => {
                        field_read(ui, "First Name", &employee.first_name);
                        field_read(ui, "Last Name", &employee.last_name);
                        field_read(ui, "Username", &employee.username);
                        field_read(ui, "Email", employee.email.as_deref().unwrap_or("-"));
                        field_read(ui, "Phone", &employee.phone);
                        field_read(ui, "Role", &employee.role);
                        field_read(ui, "Business Codes", &employee.business_codes_display());
                        if employee.is_admin() {
                            ui.label(
                                RichText::new("Admin has access to all business codes")
                                    .size(11.0)
                                    .color(MUTED),
                            );
                        }
                    }
                }

                ui.add_space(12.0);
                ui.label(RichText::new("PTO Balance").size(12.0).color(MUTED));
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(employee.pto_balance.to_string())
                            .size(28.0)
                            .strong()
                            .color(SUCCESS),
                    );
                    ui.label("days remaining");
                });
                ui.label(
                    RichText::new("PTO balance cannot be edited manually")
                        .size(11.0)
                        .color(MUTED),
                );
            });
        });
}

// ============================================================================
// ADD FORM, EXIT PROMPT, ALERT
// ============================================================================

pub fn render_employee_dialogs(ctx: &egui::Context, vm: &mut EmployeeViewModel, session: &Session) {
    if vm.add_form_open {
        render_add_form(ctx, vm, session);
    }

    if vm.confirm_exit {
        egui::Window::new("Unsaved Changes")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Do you want to proceed without saving?");
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui
                        .add(Button::new(RichText::new("Yes").color(Color32::WHITE)).fill(DANGER))
                        .clicked()
                    {
                        vm.resolve_exit(true);
                    }
                    if ui.button("No").clicked() {
                        vm.resolve_exit(false);
                    }
                });
            });
    }

    if let Some(message) = vm.alert.clone() {
        if super::render_alert(ctx, &message) {
            vm.dismiss_alert();
        }
    }
}

fn render_add_form(ctx: &egui::Context, vm: &mut EmployeeViewModel, session: &Session) {
    let businesses = vm.businesses.clone();
    let roles = vm.roles.clone();
    let blocked = vm.confirm_exit || vm.alert.is_some();
    let mut open = true;
    let mut names_changed = false;

    egui::Window::new("Add Employee")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(460.0)
        .show(ctx, |ui| {
            ui.add_enabled_ui(!blocked && !vm.is_saving, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("First Name *").size(12.0));
                        let mut first = vm.draft.first_name.clone();
                        if ui
                            .add(TextEdit::singleline(&mut first).hint_text("Enter first name").desired_width(200.0))
                            .changed()
                        {
                            names_changed |= vm.draft.set_first_name(&first);
                        }
                    });
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Last Name *").size(12.0));
                        let mut last = vm.draft.last_name.clone();
                        if ui
                            .add(TextEdit::singleline(&mut last).hint_text("Enter last name").desired_width(200.0))
                            .changed()
                        {
                            names_changed |= vm.draft.set_last_name(&last);
                        }
                    });
                });
                ui.add_space(6.0);

                ui.label(RichText::new("Username").size(12.0));
                let mut username = vm.draft.current_username().unwrap_or_default().to_string();
                ui.add_enabled(
                    false,
                    TextEdit::singleline(&mut username)
                        .hint_text("Auto-generated")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(6.0);

                ui.label(RichText::new("Email").size(12.0));
                let mut email = vm.draft.email.clone();
                if ui
                    .add(
                        TextEdit::singleline(&mut email)
                            .hint_text("Enter email (optional)")
                            .desired_width(f32::INFINITY),
                    )
                    .changed()
                {
                    vm.draft.set_email(&email);
                }
                ui.add_space(6.0);

                ui.label(RichText::new("Phone *").size(12.0));
                let mut phone = vm.draft.phone.clone();
                if ui
                    .add(
                        TextEdit::singleline(&mut phone)
                            .hint_text("10 digit phone number")
                            .desired_width(f32::INFINITY),
                    )
                    .changed()
                {
                    vm.draft.set_phone(&phone);
                }
                ui.add_space(6.0);

                ui.label(RichText::new("Role *").size(12.0));
                let mut role = vm.draft.role.clone();
                role_picker(ui, "add_role", &roles, &mut role);
                if role != vm.draft.role {
                    vm.draft.set_role(&role);
                }
                ui.add_space(6.0);

                ui.label(RichText::new("Business Codes *").size(12.0));
                for unit in &businesses {
                    let mut checked = vm.draft.bcode.contains(&unit.bcode);
                    if ui.checkbox(&mut checked, unit.label()).changed() {
                        vm.draft.toggle_business_code(&unit.bcode);
                    }
                }
                ui.add_space(6.0);

                ui.label(RichText::new("PTO Balance").size(12.0));
                ui.label(
                    RichText::new(format!("{} days (default)", vm.draft.pto_balance)).color(MUTED),
                );
                ui.add_space(14.0);

                ui.horizontal(|ui| {
                    let submit = ui.add(
                        Button::new(RichText::new("Add Employee").color(Color32::WHITE))
                            .fill(ACCENT)
                            .min_size(Vec2::new(140.0, 32.0)),
                    );
                    if submit.clicked() {
                        vm.submit_add(ctx.clone(), session);
                    }
                    if ui.button("Cancel").clicked() {
                        vm.request_close_add_form();
                    }
                    if vm.is_saving {
                        ui.spinner();
                    }
                });
            });
        });

    if names_changed {
        vm.on_name_changed(ctx.clone(), session);
    }
    if !open {
        vm.request_close_add_form();
    }
}

// ============================================================================
// FIELD HELPERS
// ============================================================================

fn field_read(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).size(12.0).color(MUTED));
    ui.label(RichText::new(value).size(14.0));
    ui.add_space(6.0);
}

fn field_edit(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(RichText::new(label).size(12.0).color(MUTED));
    ui.add(TextEdit::singleline(value).desired_width(f32::INFINITY));
    ui.add_space(6.0);
}

fn role_picker(ui: &mut egui::Ui, id: &str, roles: &[Role], selected: &mut String) {
    let text = if selected.is_empty() {
        "Select a role".to_string()
    } else {
        selected.clone()
    };
    ComboBox::new(id, "")
        .selected_text(text)
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui| {
            for role in roles {
                ui.selectable_value(selected, role.role_name.clone(), role.role_name.as_str());
            }
        });
}
