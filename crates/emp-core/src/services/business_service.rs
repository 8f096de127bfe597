//! Business details panel: read-only list of the tenant's business units

use std::sync::Arc;

use tracing::debug;

use crate::domain::{BusinessUnit, Session};
use crate::error::DomainError;
use crate::repositories::BusinessRepository;

pub struct BusinessService<B: BusinessRepository> {
    business_repo: Arc<B>,
}

impl<B: BusinessRepository> BusinessService<B> {
    pub fn new(business_repo: Arc<B>) -> Self {
        Self { business_repo }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<BusinessUnit>, DomainError> {
        let units = self.business_repo.list_by_tenant(session.tenant_id).await?;
        debug!(tenant_id = session.tenant_id, count = units.len(), "business units loaded");
        Ok(units)
    }
}
