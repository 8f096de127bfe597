//! Root Application
//!
//! Owns the session holder and switches between the login screen and the
//! console shell. Background results arrive through `event_rx`.

use std::sync::Arc;

use crate::events::{AppEvent, ConsoleEvent};
use crate::services::ConsoleServices;
use crate::view::{
    render_business_details, render_employee_details, render_employee_dialogs, render_employees,
    render_login, render_placeholder, render_sidebar,
};
use crate::viewmodel::{BusinessViewModel, EmployeeViewModel, LoginViewModel, MenuViewModel};
use crate::{theme, CONSOLE_SIZE, LOGIN_SIZE};
use eframe::egui;
use emp_core::domain::{ConsolePanel, Session, SessionHolder};
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Login,
    Console,
}

pub struct ConsoleApp {
    pub screen: AppScreen,
    pub session: SessionHolder,
    pub login_vm: LoginViewModel,
    pub menu_vm: MenuViewModel,
    pub employee_vm: EmployeeViewModel,
    pub business_vm: BusinessViewModel,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl ConsoleApp {
    pub fn new(cc: &eframe::CreationContext<'_>, services: Arc<ConsoleServices>) -> Self {
        theme::apply(&cc.egui_ctx);
        Self::with_services(services)
    }

    fn with_services(services: Arc<ConsoleServices>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self::with_channel(services, event_tx, event_rx)
    }

    fn with_channel(
        services: Arc<ConsoleServices>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            screen: AppScreen::Login,
            session: SessionHolder::new(),
            login_vm: LoginViewModel::new(Arc::clone(&services), event_tx.clone()),
            menu_vm: MenuViewModel::new(),
            employee_vm: EmployeeViewModel::new(Arc::clone(&services), event_tx.clone()),
            business_vm: BusinessViewModel::new(services, event_tx),
            event_rx,
        }
    }

    fn process_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::LoginSucceeded(session) => {
                    info!(tenant_id = session.tenant_id, "Signed in as {}", session.username);
                    self.login_vm.on_login_success();
                    self.start_console(ctx, session);
                }
                AppEvent::LoginFailed(msg) => {
                    self.login_vm.on_login_failed(msg);
                }
                AppEvent::Console { tenant_id, event } => {
                    let current = self.session.current().map(|s| s.tenant_id);
                    if current != Some(tenant_id) {
                        debug!(tenant_id, ?current, "Dropping result for a closed session: {:?}", event);
                        continue;
                    }
                    self.handle_console_event(ctx, event);
                }
            }
            ctx.request_repaint();
        }
    }

    fn handle_console_event(&mut self, ctx: &egui::Context, event: ConsoleEvent) {
        match event {
            ConsoleEvent::DirectoryLoaded(snapshot) => {
                self.employee_vm.on_loaded(snapshot);
            }
            ConsoleEvent::DirectoryFailed(msg) => {
                self.employee_vm.on_load_failed(msg);
            }
            ConsoleEvent::EmployeesRefreshed(employees) => {
                self.employee_vm.on_refreshed(employees);
            }
            ConsoleEvent::UsernameGenerated {
                first_name,
                last_name,
                username,
            } => {
                self.employee_vm
                    .on_username_generated(&first_name, &last_name, username);
            }
            ConsoleEvent::EmployeeAdded(username) => {
                info!("Employee {} added", username);
                if let Some(session) = self.session.current() {
                    self.employee_vm.on_employee_added(ctx.clone(), session);
                }
            }
            ConsoleEvent::EmployeeUpdated(employee) => {
                if let Some(session) = self.session.current() {
                    self.employee_vm
                        .on_employee_updated(ctx.clone(), session, employee);
                }
            }
            ConsoleEvent::EmployeeActionFailed(msg) => {
                self.employee_vm.on_action_failed(msg);
            }
            ConsoleEvent::BusinessesLoaded(units) => {
                self.business_vm.on_loaded(units);
            }
            ConsoleEvent::BusinessesFailed(msg) => {
                self.business_vm.on_failed(msg);
            }
        }
    }

    fn start_console(&mut self, ctx: &egui::Context, session: Session) {
        self.menu_vm.reset();
        self.employee_vm.load(ctx.clone(), &session);
        self.session.sign_in(session);
        self.screen = AppScreen::Console;
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(CONSOLE_SIZE.into()));
    }

    fn logout(&mut self, ctx: &egui::Context) {
        if let Some(session) = self.session.sign_out() {
            info!("Signed out {}", session.username);
        }
        self.menu_vm.reset();
        self.employee_vm.reset();
        self.business_vm.reset();
        self.login_vm.reset();
        self.screen = AppScreen::Login;
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(LOGIN_SIZE.into()));
    }

    /// Loads data for a panel when it becomes active.
    fn on_panel_changed(&mut self, ctx: &egui::Context, panel: ConsolePanel) {
        let Some(session) = self.session.current() else {
            return;
        };
        info!(panel = panel.id(), "Opened {}", panel.label());
        match panel {
            ConsolePanel::Employees => self.employee_vm.load(ctx.clone(), session),
            ConsolePanel::BusinessDetails => self.business_vm.load(ctx.clone(), session),
            _ => {}
        }
    }

    fn render_console(&mut self, ctx: &egui::Context) {
        let Some(session) = self.session.current() else {
            self.screen = AppScreen::Login;
            return;
        };

        render_sidebar(ctx, &mut self.menu_vm, session);

        let active = self.menu_vm.active;
        if active == ConsolePanel::Employees {
            render_employee_details(ctx, &mut self.employee_vm, session);
        }

        let blocked = active == ConsolePanel::Employees
            && (self.employee_vm.alert.is_some() || self.employee_vm.confirm_exit);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::SURFACE).inner_margin(24.0))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    if active.is_placeholder() {
                        render_placeholder(ui, active);
                    } else if active == ConsolePanel::BusinessDetails {
                        render_business_details(ui, &self.business_vm);
                    } else {
                        render_employees(ui, &mut self.employee_vm);
                    }
                });
            });

        if active == ConsolePanel::Employees {
            render_employee_dialogs(ctx, &mut self.employee_vm, session);
        }
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events(ctx);

        match self.screen {
            AppScreen::Login => render_login(ctx, &mut self.login_vm),
            AppScreen::Console => {
                self.render_console(ctx);

                if self.menu_vm.take_logout() {
                    self.logout(ctx);
                } else if let Some(panel) = self.menu_vm.take_changed() {
                    self.on_panel_changed(ctx, panel);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::offline_services;
    use emp_core::domain::Employee;
    use emp_core::services::DirectorySnapshot;

    fn session() -> Session {
        Session::from(&employee(42, "jane_doe"))
    }

    fn employee(tenant_id: i64, username: &str) -> Employee {
        Employee {
            id: 3,
            tenant_id,
            username: username.into(),
            first_name: "jane".into(),
            last_name: "doe".into(),
            role: "Manager".into(),
            email: None,
            phone: "5551234567".into(),
            bcode: vec!["NY01".into()],
            pto_balance: 15,
            password: None,
            profile_picture: None,
        }
    }

    fn snapshot(employees: Vec<Employee>) -> DirectorySnapshot {
        DirectorySnapshot {
            employees,
            businesses: Vec::new(),
            roles: Vec::new(),
        }
    }

    #[test]
    fn test_starts_on_login_screen() {
        let app = ConsoleApp::with_services(offline_services());
        assert_eq!(app.screen, AppScreen::Login);
        assert!(app.session.current().is_none());
    }

    #[test]
    fn test_logout_clears_session_and_state() {
        let ctx = egui::Context::default();
        let mut app = ConsoleApp::with_services(offline_services());
        app.session.sign_in(session());
        app.screen = AppScreen::Console;
        app.menu_vm.select(ConsolePanel::Timecard);
        app.employee_vm.search = "jane".into();

        app.logout(&ctx);

        assert_eq!(app.screen, AppScreen::Login);
        assert!(app.session.current().is_none());
        assert_eq!(app.menu_vm.active, ConsolePanel::Employees);
        assert!(app.employee_vm.search.is_empty());
    }

    #[test]
    fn test_login_failure_event_reaches_form() {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = ConsoleApp::with_channel(offline_services(), tx.clone(), rx);
        app.login_vm.is_loading = true;

        tx.send(AppEvent::LoginFailed("Invalid username or password".into()))
            .unwrap();
        app.process_events(&ctx);

        assert_eq!(app.screen, AppScreen::Login);
        assert_eq!(
            app.login_vm.error.as_deref(),
            Some("Invalid username or password")
        );
        assert!(!app.login_vm.is_loading);
    }

    #[tokio::test]
    async fn test_login_success_opens_console_and_loads_directory() {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = ConsoleApp::with_channel(offline_services(), tx.clone(), rx);
        app.login_vm.password = "secret".into();

        tx.send(AppEvent::LoginSucceeded(session())).unwrap();
        app.process_events(&ctx);

        assert_eq!(app.screen, AppScreen::Console);
        assert_eq!(app.session.current().map(|s| s.tenant_id), Some(42));
        assert!(app.login_vm.password.is_empty());
        assert!(app.employee_vm.is_loading);
        assert_eq!(app.menu_vm.active, ConsolePanel::Employees);
    }

    #[tokio::test]
    async fn test_late_directory_from_previous_tenant_is_dropped() {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = ConsoleApp::with_channel(offline_services(), tx.clone(), rx);

        tx.send(AppEvent::LoginSucceeded(session())).unwrap();
        app.process_events(&ctx);
        app.logout(&ctx);
        tx.send(AppEvent::LoginSucceeded(Session::from(&employee(99, "sam_lee"))))
            .unwrap();
        app.process_events(&ctx);

        tx.send(AppEvent::console(
            42,
            ConsoleEvent::DirectoryLoaded(snapshot(vec![employee(42, "jane_doe")])),
        ))
        .unwrap();
        app.process_events(&ctx);

        assert_eq!(app.session.current().map(|s| s.tenant_id), Some(99));
        assert!(app.employee_vm.employees.iter().all(|e| e.tenant_id == 99));
        assert!(app.employee_vm.employees.is_empty());
        assert!(app.employee_vm.is_loading);
    }

    #[tokio::test]
    async fn test_directory_for_current_tenant_is_applied() {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = ConsoleApp::with_channel(offline_services(), tx.clone(), rx);

        tx.send(AppEvent::LoginSucceeded(session())).unwrap();
        tx.send(AppEvent::console(
            42,
            ConsoleEvent::DirectoryLoaded(snapshot(vec![employee(42, "jane_doe")])),
        ))
        .unwrap();
        app.process_events(&ctx);

        assert_eq!(app.employee_vm.employees.len(), 1);
        assert!(!app.employee_vm.is_loading);
    }

    #[test]
    fn test_console_result_after_logout_is_dropped() {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = ConsoleApp::with_channel(offline_services(), tx.clone(), rx);

        tx.send(AppEvent::console(
            42,
            ConsoleEvent::EmployeeActionFailed("Error adding employee: timeout".into()),
        ))
        .unwrap();
        app.process_events(&ctx);

        assert!(app.employee_vm.alert.is_none());
    }
}
