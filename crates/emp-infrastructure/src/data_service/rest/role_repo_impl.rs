// ============================================================================
// Employee Console Infrastructure - REST Role Repository
// File: crates/emp-infrastructure/src/data_service/rest/role_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use emp_core::domain::Role;
use emp_core::error::DomainError;
use emp_core::repositories::RoleRepository;
use emp_shared::constants::TABLE_ROLES;
use tracing::error;

use crate::data_service::{RestClient, TableQuery};

pub struct RestRoleRepository {
    client: Arc<RestClient>,
}

impl RestRoleRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoleRepository for RestRoleRepository {
    async fn list_all(&self) -> Result<Vec<Role>, DomainError> {
        let query = TableQuery::new(TABLE_ROLES).select("*");

        self.client.select::<Role>(&query).await.map_err(|e| {
            error!("Data service error listing roles: {}", e);
            DomainError::from(e)
        })
    }
}
