//! Business unit repository trait (port)

use async_trait::async_trait;
use emp_shared::TenantId;

use crate::domain::BusinessUnit;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn list_by_tenant(&self, tenant_id: TenantId) -> Result<Vec<BusinessUnit>, DomainError>;
}
