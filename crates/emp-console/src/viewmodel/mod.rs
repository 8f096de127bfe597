//! ViewModel Module
//!
//! State per screen. Remote calls run on tokio and report back via `AppEvent`.

pub mod business_vm;
pub mod employee_vm;
pub mod login_vm;
pub mod menu_vm;

pub use business_vm::BusinessViewModel;
pub use employee_vm::EmployeeViewModel;
pub use login_vm::LoginViewModel;
pub use menu_vm::MenuViewModel;
