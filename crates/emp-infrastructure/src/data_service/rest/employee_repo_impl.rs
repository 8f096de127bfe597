// ============================================================================
// Employee Console Infrastructure - REST Employee Repository
// File: crates/emp-infrastructure/src/data_service/rest/employee_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use emp_core::domain::{Employee, EmployeeUpdate, NewEmployee};
use emp_core::error::DomainError;
use emp_core::repositories::EmployeeRepository;
use emp_shared::constants::{DEFAULT_PTO_BALANCE, TABLE_EMPLOYEES};
use emp_shared::{RecordId, TenantId};
use serde::Deserialize;
use tracing::{error, info};

use crate::data_service::{RestClient, TableQuery};

pub struct RestEmployeeRepository {
    client: Arc<RestClient>,
}

impl RestEmployeeRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

// Internal row type; nullable columns are tolerated
#[derive(Debug, Deserialize)]
struct EmployeeRow {
    pub id: RecordId,
    pub tenant_id: TenantId,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bcode: Option<Vec<String>>,
    pub pto_balance: Option<i32>,
    pub password: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            tenant_id: row.tenant_id,
            username: row.username,
            first_name: row.first_name.unwrap_or_default(),
            last_name: row.last_name.unwrap_or_default(),
            role: row.role.unwrap_or_default(),
            email: row.email.filter(|e| !e.is_empty()),
            phone: row.phone.unwrap_or_default(),
            bcode: row.bcode.unwrap_or_default(),
            pto_balance: row.pto_balance.unwrap_or(DEFAULT_PTO_BALANCE),
            password: row.password,
            profile_picture: row.profile_picture,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UsernameRow {
    pub username: String,
}

#[async_trait]
impl EmployeeRepository for RestEmployeeRepository {
    async fn find_by_username(&self, username: &str) -> Result<Vec<Employee>, DomainError> {
        let query = TableQuery::new(TABLE_EMPLOYEES)
            .select("*")
            .eq("username", username);

        let rows: Vec<EmployeeRow> = self.client.select(&query).await.map_err(|e| {
            error!("Data service error finding employee by username: {}", e);
            DomainError::from(e)
        })?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn list_by_tenant(&self, tenant_id: TenantId) -> Result<Vec<Employee>, DomainError> {
        let query = TableQuery::new(TABLE_EMPLOYEES)
            .select("*")
            .eq("tenant_id", tenant_id)
            .order("id", true);

        let rows: Vec<EmployeeRow> = self.client.select(&query).await.map_err(|e| {
            error!("Data service error listing employees of tenant {}: {}", tenant_id, e);
            DomainError::from(e)
        })?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_usernames_by_prefix(
        &self,
        tenant_id: TenantId,
        prefix: &str,
    ) -> Result<Vec<String>, DomainError> {
        let query = TableQuery::new(TABLE_EMPLOYEES)
            .select("username")
            .eq("tenant_id", tenant_id)
            .like("username", &format!("{}*", prefix));

        let rows: Vec<UsernameRow> = self.client.select(&query).await.map_err(|e| {
            error!("Data service error fetching usernames like {}: {}", prefix, e);
            DomainError::from(e)
        })?;

        Ok(rows.into_iter().map(|r| r.username).collect())
    }

    async fn create(&self, employee: &NewEmployee) -> Result<(), DomainError> {
        info!("Creating employee with username: {}", employee.username);

        self.client
            .insert(TABLE_EMPLOYEES, std::slice::from_ref(employee))
            .await
            .map_err(|e| {
                error!("Data service error creating employee: {}", e);
                DomainError::from(e)
            })
    }

    async fn update(&self, id: RecordId, changes: &EmployeeUpdate) -> Result<(), DomainError> {
        let query = TableQuery::new(TABLE_EMPLOYEES).eq("id", id);

        self.client.update(&query, changes).await.map_err(|e| {
            error!("Data service error updating employee {}: {}", id, e);
            DomainError::from(e)
        })
    }
}
