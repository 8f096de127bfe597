//! Repository traits (ports)

pub mod employee_repository;
pub mod business_repository;
pub mod role_repository;

pub use employee_repository::EmployeeRepository;
pub use business_repository::BusinessRepository;
pub use role_repository::RoleRepository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use business_repository::MockBusinessRepository;
#[cfg(test)]
pub use role_repository::MockRoleRepository;
