// ============================================================================
// Employee Console Infrastructure - REST Business Repository
// File: crates/emp-infrastructure/src/data_service/rest/business_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use emp_core::domain::BusinessUnit;
use emp_core::error::DomainError;
use emp_core::repositories::BusinessRepository;
use emp_shared::constants::TABLE_BUSINESS_DETAILS;
use emp_shared::{RecordId, TenantId};
use serde::Deserialize;
use tracing::error;

use crate::data_service::{RestClient, TableQuery};

pub struct RestBusinessRepository {
    client: Arc<RestClient>,
}

impl RestBusinessRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct BusinessRow {
    pub id: RecordId,
    pub tenant_id: TenantId,
    pub bcode: String,
    pub business_name: Option<String>,
}

impl From<BusinessRow> for BusinessUnit {
    fn from(row: BusinessRow) -> Self {
        BusinessUnit {
            id: row.id,
            tenant_id: row.tenant_id,
            bcode: row.bcode,
            business_name: row.business_name.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl BusinessRepository for RestBusinessRepository {
    async fn list_by_tenant(&self, tenant_id: TenantId) -> Result<Vec<BusinessUnit>, DomainError> {
        let query = TableQuery::new(TABLE_BUSINESS_DETAILS)
            .select("*")
            .eq("tenant_id", tenant_id);

        let rows: Vec<BusinessRow> = self.client.select(&query).await.map_err(|e| {
            error!("Data service error listing business units of tenant {}: {}", tenant_id, e);
            DomainError::from(e)
        })?;

        Ok(rows.into_iter().map(BusinessUnit::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_service::rest::test_support::client_for;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_by_tenant_maps_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/business_details"))
            .and(query_param("tenant_id", "eq.42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "tenant_id": 42, "bcode": "NY01", "business_name": "Uptown"},
                {"id": 2, "tenant_id": 42, "bcode": "NY02", "business_name": null}
            ])))
            .mount(&server)
            .await;

        let repo = RestBusinessRepository::new(client_for(&server.uri()));
        let units = repo.list_by_tenant(42).await.unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].label(), "NY01 - Uptown");
        assert_eq!(units[1].business_name, "");
    }

    #[tokio::test]
    async fn test_server_error_becomes_domain_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/business_details"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let repo = RestBusinessRepository::new(client_for(&server.uri()));
        assert!(matches!(
            repo.list_by_tenant(42).await,
            Err(DomainError::DataServiceError(msg)) if msg == "internal error"
        ));
    }
}
