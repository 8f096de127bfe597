//! Employee Directory ViewModel
//!
//! List with search, the add form with username preview and unsaved-changes
//! guard, and the details drawer with edit mode. Every failure ends up in
//! `alert`, which the view shows as a blocking message.

use std::sync::Arc;

use eframe::egui;
use emp_core::domain::{BusinessUnit, Employee, EmployeeChanges, EmployeeDraft, Role, Session};
use emp_core::error::DomainError;
use emp_core::services::search::filter_employees;
use emp_core::services::validation::{validate_changes, validate_draft};
use emp_core::services::DirectorySnapshot;
use tokio::sync::mpsc;
use tracing::warn;

use crate::events::{AppEvent, ConsoleEvent};
use crate::services::{ConsoleDirectoryService, ConsoleServices};

pub const ADD_FAILED_PREFIX: &str = "Error adding employee: ";
pub const UPDATE_FAILED_PREFIX: &str = "Error updating employee: ";

/// Details drawer for one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub employee: Employee,
    /// Present while editing.
    pub changes: Option<EmployeeChanges>,
}

pub struct EmployeeViewModel {
    pub employees: Vec<Employee>,
    pub businesses: Vec<BusinessUnit>,
    pub roles: Vec<Role>,
    pub search: String,
    pub is_loading: bool,
    pub is_saving: bool,
    pub load_error: Option<String>,

    pub add_form_open: bool,
    pub draft: EmployeeDraft,
    pub confirm_exit: bool,

    pub details: Option<EmployeeDetails>,

    /// Blocking message, cleared when acknowledged.
    pub alert: Option<String>,

    services: Arc<ConsoleServices>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl EmployeeViewModel {
    pub fn new(services: Arc<ConsoleServices>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            employees: Vec::new(),
            businesses: Vec::new(),
            roles: Vec::new(),
            search: String::new(),
            is_loading: false,
            is_saving: false,
            load_error: None,
            add_form_open: false,
            draft: EmployeeDraft::new(),
            confirm_exit: false,
            details: None,
            alert: None,
            services,
            event_tx,
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Employees, business units and roles of the session's tenant.
    pub fn load(&mut self, ctx: egui::Context, session: &Session) {
        self.is_loading = true;
        self.load_error = None;

        let session = session.clone();
        let services = Arc::clone(&self.services);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match services.directory.load(&session).await {
                Ok(snapshot) => ConsoleEvent::DirectoryLoaded(snapshot),
                Err(e) => ConsoleEvent::DirectoryFailed(e.to_string()),
            };
            let _ = tx.send(AppEvent::console(session.tenant_id, event));
            ctx.request_repaint();
        });
    }

    fn refresh_employees(&self, ctx: egui::Context, session: &Session) {
        let session = session.clone();
        let services = Arc::clone(&self.services);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match services.directory.list_employees(&session).await {
                Ok(employees) => ConsoleEvent::EmployeesRefreshed(employees),
                Err(e) => ConsoleEvent::DirectoryFailed(e.to_string()),
            };
            let _ = tx.send(AppEvent::console(session.tenant_id, event));
            ctx.request_repaint();
        });
    }

    pub fn on_loaded(&mut self, snapshot: DirectorySnapshot) {
        self.is_loading = false;
        self.employees = snapshot.employees;
        self.businesses = snapshot.businesses;
        self.roles = snapshot.roles;
    }

    pub fn on_refreshed(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    pub fn on_load_failed(&mut self, error: String) {
        self.is_loading = false;
        self.load_error = Some(error);
    }

    pub fn visible_employees(&self) -> Vec<&Employee> {
        filter_employees(&self.employees, &self.search)
    }

    // ------------------------------------------------------------------
    // Add form
    // ------------------------------------------------------------------

    pub fn open_add_form(&mut self) {
        if let Err(e) = ConsoleDirectoryService::ensure_can_add(&self.businesses) {
            self.alert = Some(e.to_string());
            return;
        }
        self.draft.reset();
        self.confirm_exit = false;
        self.add_form_open = true;
    }

    /// Called after either name field changed; previews the username once both are set.
    pub fn on_name_changed(&mut self, ctx: egui::Context, session: &Session) {
        if !self.draft.can_generate_username() {
            return;
        }

        let first_name = self.draft.first_name.clone();
        let last_name = self.draft.last_name.clone();
        let session = session.clone();
        let services = Arc::clone(&self.services);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match services
                .directory
                .generate_username(&session, &first_name, &last_name)
                .await
            {
                Ok(username) => {
                    let event = ConsoleEvent::UsernameGenerated {
                        first_name,
                        last_name,
                        username,
                    };
                    let _ = tx.send(AppEvent::console(session.tenant_id, event));
                    ctx.request_repaint();
                }
                Err(e) => warn!("Username preview failed: {}", e),
            }
        });
    }

    pub fn on_username_generated(&mut self, first_name: &str, last_name: &str, username: String) {
        self.draft
            .apply_generated_username(first_name, last_name, username);
    }

    /// Close button or backdrop click on the add form.
    pub fn request_close_add_form(&mut self) {
        if self.draft.has_unsaved_changes() {
            self.confirm_exit = true;
        } else {
            self.close_add_form();
        }
    }

    /// Answer to "proceed without saving?".
    pub fn resolve_exit(&mut self, discard: bool) {
        self.confirm_exit = false;
        if discard {
            self.close_add_form();
        }
    }

    fn close_add_form(&mut self) {
        self.add_form_open = false;
        self.draft.reset();
    }

    pub fn submit_add(&mut self, ctx: egui::Context, session: &Session) {
        if self.is_saving {
            return;
        }
        if let Err(e) = validate_draft(&self.draft) {
            self.alert = Some(e.to_string());
            return;
        }

        self.is_saving = true;
        let draft = self.draft.clone();
        let session = session.clone();
        let services = Arc::clone(&self.services);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match services.directory.add_employee(&session, &draft).await {
                Ok(username) => ConsoleEvent::EmployeeAdded(username),
                Err(e) => ConsoleEvent::EmployeeActionFailed(write_failure(ADD_FAILED_PREFIX, &e)),
            };
            let _ = tx.send(AppEvent::console(session.tenant_id, event));
            ctx.request_repaint();
        });
    }

    pub fn on_employee_added(&mut self, ctx: egui::Context, session: &Session) {
        self.is_saving = false;
        self.close_add_form();
        self.refresh_employees(ctx, session);
    }

    // ------------------------------------------------------------------
    // Details and edit
    // ------------------------------------------------------------------

    pub fn open_details(&mut self, employee: &Employee) {
        self.details = Some(EmployeeDetails {
            employee: employee.clone(),
            changes: None,
        });
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    pub fn start_edit(&mut self) {
        let Some(details) = self.details.as_mut() else {
            return;
        };
        if details.employee.is_admin() {
            self.alert = Some(DomainError::AdminNotEditable.to_string());
            return;
        }
        details.changes = Some(EmployeeChanges::from(&details.employee));
    }

    pub fn cancel_edit(&mut self) {
        if let Some(details) = self.details.as_mut() {
            details.changes = None;
        }
    }

    pub fn submit_edit(&mut self, ctx: egui::Context, session: &Session) {
        if self.is_saving {
            return;
        }
        let Some(details) = self.details.as_ref() else {
            return;
        };
        let Some(changes) = details.changes.clone() else {
            return;
        };
        if let Err(e) = validate_changes(&changes) {
            self.alert = Some(e.to_string());
            return;
        }

        self.is_saving = true;
        let original = details.employee.clone();
        let session = session.clone();
        let services = Arc::clone(&self.services);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match services
                .directory
                .update_employee(&session, &original, &changes)
                .await
            {
                Ok(employee) => ConsoleEvent::EmployeeUpdated(employee),
                Err(e) => ConsoleEvent::EmployeeActionFailed(write_failure(UPDATE_FAILED_PREFIX, &e)),
            };
            let _ = tx.send(AppEvent::console(session.tenant_id, event));
            ctx.request_repaint();
        });
    }

    pub fn on_employee_updated(&mut self, ctx: egui::Context, session: &Session, employee: Employee) {
        self.is_saving = false;
        if let Some(details) = self.details.as_mut() {
            if details.employee.id == employee.id {
                details.employee = employee;
                details.changes = None;
            }
        }
        self.refresh_employees(ctx, session);
    }

    pub fn on_action_failed(&mut self, message: String) {
        self.is_saving = false;
        self.alert = Some(message);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn reset(&mut self) {
        self.employees.clear();
        self.businesses.clear();
        self.roles.clear();
        self.search.clear();
        self.is_loading = false;
        self.is_saving = false;
        self.load_error = None;
        self.add_form_open = false;
        self.draft.reset();
        self.confirm_exit = false;
        self.details = None;
        self.alert = None;
    }
}

/// Local refusals show their own message; remote failures get the action prefix.
pub fn write_failure(prefix: &str, error: &DomainError) -> String {
    match error {
        e if e.is_rejected_locally() => e.to_string(),
        DomainError::DataServiceError(detail) => format!("{}{}", prefix, detail),
        e => format!("{}{}", prefix, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::offline_services;

    fn vm() -> (EmployeeViewModel, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (EmployeeViewModel::new(offline_services(), tx), rx)
    }

    fn employee(id: i64, username: &str, first: &str, last: &str) -> Employee {
        Employee {
            id,
            tenant_id: 42,
            username: username.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            role: "Cashier".to_string(),
            email: None,
            phone: "5551234567".to_string(),
            bcode: vec!["NY01".to_string()],
            pto_balance: 15,
            password: None,
            profile_picture: None,
        }
    }

    fn session() -> Session {
        Session::from(&employee(1, "Admin_42", "Tenant", "Admin"))
    }

    fn business() -> BusinessUnit {
        BusinessUnit {
            id: 1,
            tenant_id: 42,
            bcode: "NY01".into(),
            business_name: "Uptown".into(),
        }
    }

    #[test]
    fn test_add_refused_without_business_units() {
        let (mut vm, _rx) = vm();
        vm.open_add_form();

        assert!(!vm.add_form_open);
        assert_eq!(
            vm.alert.as_deref(),
            Some("Please add at least one business before adding employees")
        );
    }

    #[test]
    fn test_dirty_form_asks_before_closing() {
        let (mut vm, _rx) = vm();
        vm.businesses = vec![business()];
        vm.open_add_form();
        vm.draft.set_phone("555");

        vm.request_close_add_form();
        assert!(vm.confirm_exit);
        assert!(vm.add_form_open);

        vm.resolve_exit(false);
        assert!(vm.add_form_open);
        assert_eq!(vm.draft.phone, "555");

        vm.request_close_add_form();
        vm.resolve_exit(true);
        assert!(!vm.add_form_open);
        assert!(!vm.draft.has_unsaved_changes());
    }

    #[test]
    fn test_clean_form_closes_immediately() {
        let (mut vm, _rx) = vm();
        vm.businesses = vec![business()];
        vm.open_add_form();

        vm.request_close_add_form();
        assert!(!vm.confirm_exit);
        assert!(!vm.add_form_open);
    }

    #[test]
    fn test_submit_without_role_is_blocked_locally() {
        let (mut vm, mut rx) = vm();
        vm.businesses = vec![business()];
        vm.open_add_form();
        vm.draft.set_first_name("john");
        vm.draft.set_last_name("smith");
        vm.draft.set_phone("5551234567");
        vm.draft.toggle_business_code("NY01");

        vm.submit_add(egui::Context::default(), &session());

        assert_eq!(vm.alert.as_deref(), Some("Please select a role"));
        assert!(!vm.is_saving);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_stale_username_preview_is_ignored() {
        let (mut vm, _rx) = vm();
        vm.draft.set_first_name("john");
        vm.draft.set_last_name("smith");

        vm.on_username_generated("john", "smit", "john_smit".into());
        assert_eq!(vm.draft.current_username(), None);

        vm.on_username_generated("john", "smith", "john_smith1".into());
        assert_eq!(vm.draft.current_username(), Some("john_smith1"));
    }

    #[test]
    fn test_admin_cannot_enter_edit_mode() {
        let (mut vm, _rx) = vm();
        vm.open_details(&employee(1, "Admin_42", "Tenant", "Admin"));
        vm.start_edit();

        assert!(vm.details.as_ref().unwrap().changes.is_none());
        assert!(vm.alert.is_some());
    }

    #[test]
    fn test_edit_with_bad_phone_is_blocked_locally() {
        let (mut vm, mut rx) = vm();
        vm.open_details(&employee(5, "jane_doe", "jane", "doe"));
        vm.start_edit();
        vm.details.as_mut().unwrap().changes.as_mut().unwrap().set_phone("555-12");

        vm.submit_edit(egui::Context::default(), &session());

        assert_eq!(vm.alert.as_deref(), Some("Phone number must be exactly 10 digits"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_search_filters_loaded_employees() {
        let (mut vm, _rx) = vm();
        vm.on_loaded(DirectorySnapshot {
            employees: vec![
                employee(1, "jane_doe", "Jane", "Doe"),
                employee(2, "john_smith", "John", "Smith"),
            ],
            businesses: vec![business()],
            roles: Vec::new(),
        });

        vm.search = "SMI".into();
        let visible: Vec<i64> = vm.visible_employees().iter().map(|e| e.id).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn test_write_failure_messages() {
        assert_eq!(
            write_failure(ADD_FAILED_PREFIX, &DomainError::DataServiceError("duplicate key".into())),
            "Error adding employee: duplicate key"
        );
        assert_eq!(
            write_failure(UPDATE_FAILED_PREFIX, &DomainError::validation("Please select a role")),
            "Please select a role"
        );
    }
}
