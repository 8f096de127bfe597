//! REST repository implementations

pub mod employee_repo_impl;
pub mod business_repo_impl;
pub mod role_repo_impl;

pub use employee_repo_impl::RestEmployeeRepository;
pub use business_repo_impl::RestBusinessRepository;
pub use role_repo_impl::RestRoleRepository;
