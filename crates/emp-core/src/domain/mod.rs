//! # Employee Console Core - Domain Module
//!
//! Domain entities for the employee console.

pub mod employee;
pub mod employee_form;
pub mod business_unit;
pub mod role;
pub mod session;
pub mod console;

// Re-export all entities and enums
pub use employee::{Employee, EmployeeUpdate, NewEmployee};
pub use employee_form::{EmployeeChanges, EmployeeDraft};
pub use business_unit::BusinessUnit;
pub use role::Role;
pub use session::{Session, SessionHolder};
pub use console::ConsolePanel;
