//! View Module
//!
//! Rendering only. State changes go through the view models.

pub mod alert_view;
pub mod business_view;
pub mod employees_view;
pub mod login_view;
pub mod placeholder_view;
pub mod sidebar_view;

pub use alert_view::render_alert;
pub use business_view::render_business_details;
pub use employees_view::{render_employee_details, render_employee_dialogs, render_employees};
pub use login_view::render_login;
pub use placeholder_view::render_placeholder;
pub use sidebar_view::render_sidebar;
