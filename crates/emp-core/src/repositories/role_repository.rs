//! Role repository trait (port)

use async_trait::async_trait;

use crate::domain::Role;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Role>, DomainError>;
}
