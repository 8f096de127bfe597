//! Application Events
//!
//! Results of background tasks, delivered to the UI thread.

use emp_core::domain::{BusinessUnit, Employee, Session};
use emp_core::services::DirectorySnapshot;
use emp_shared::TenantId;

#[derive(Debug)]
pub enum AppEvent {
    LoginSucceeded(Session),
    LoginFailed(String),

    /// Result of work started for a signed-in tenant. Dropped unless that
    /// tenant is still the current session's.
    Console {
        tenant_id: TenantId,
        event: ConsoleEvent,
    },
}

impl AppEvent {
    pub fn console(tenant_id: TenantId, event: ConsoleEvent) -> Self {
        AppEvent::Console { tenant_id, event }
    }
}

#[derive(Debug)]
pub enum ConsoleEvent {
    /// Employees, business units and roles for the directory panel
    DirectoryLoaded(DirectorySnapshot),
    DirectoryFailed(String),
    /// Employee list re-fetched after a write
    EmployeesRefreshed(Vec<Employee>),

    /// Username preview for the names it was generated from
    UsernameGenerated {
        first_name: String,
        last_name: String,
        username: String,
    },

    EmployeeAdded(String),
    EmployeeUpdated(Employee),
    /// A write was refused or failed; shown as a blocking message
    EmployeeActionFailed(String),

    BusinessesLoaded(Vec<BusinessUnit>),
    BusinessesFailed(String),
}
