//! Employee repository trait (port)

use async_trait::async_trait;
use emp_shared::{RecordId, TenantId};

use crate::domain::{Employee, EmployeeUpdate, NewEmployee};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees with this username, across tenants.
    async fn find_by_username(&self, username: &str) -> Result<Vec<Employee>, DomainError>;

    /// Employees of a tenant ordered by id.
    async fn list_by_tenant(&self, tenant_id: TenantId) -> Result<Vec<Employee>, DomainError>;

    /// Usernames in the tenant matching the pattern `prefix*`.
    async fn find_usernames_by_prefix(
        &self,
        tenant_id: TenantId,
        prefix: &str,
    ) -> Result<Vec<String>, DomainError>;

    async fn create(&self, employee: &NewEmployee) -> Result<(), DomainError>;

    async fn update(&self, id: RecordId, changes: &EmployeeUpdate) -> Result<(), DomainError>;
}
