// ============================================================================
// Employee Console Core - Directory Service
// File: crates/emp-core/src/services/directory_service.rs
// ============================================================================
//! Employee directory: load, add and edit employees of the session's tenant

use std::sync::Arc;

use emp_security::SecretService;
use emp_shared::utils::{mask_email, mask_phone};
use tracing::{error, info, warn};

use crate::domain::{
    BusinessUnit, Employee, EmployeeChanges, EmployeeDraft, EmployeeUpdate, NewEmployee, Role,
    Session,
};
use crate::error::DomainError;
use crate::repositories::{BusinessRepository, EmployeeRepository, RoleRepository};
use crate::services::username_service::UsernameService;
use crate::services::validation::{validate_changes, validate_draft};

/// Everything the directory panel needs, loaded together.
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    pub employees: Vec<Employee>,
    pub businesses: Vec<BusinessUnit>,
    pub roles: Vec<Role>,
}

pub struct DirectoryService<E, B, R>
where
    E: EmployeeRepository,
    B: BusinessRepository,
    R: RoleRepository,
{
    employee_repo: Arc<E>,
    business_repo: Arc<B>,
    role_repo: Arc<R>,
    usernames: UsernameService<E>,
    hash_new_secrets: bool,
}

impl<E, B, R> DirectoryService<E, B, R>
where
    E: EmployeeRepository,
    B: BusinessRepository,
    R: RoleRepository,
{
    pub fn new(
        employee_repo: Arc<E>,
        business_repo: Arc<B>,
        role_repo: Arc<R>,
        hash_new_secrets: bool,
    ) -> Self {
        Self {
            usernames: UsernameService::new(Arc::clone(&employee_repo)),
            employee_repo,
            business_repo,
            role_repo,
            hash_new_secrets,
        }
    }

    /// Loads employees, business units and roles concurrently.
    pub async fn load(&self, session: &Session) -> Result<DirectorySnapshot, DomainError> {
        let (employees, businesses, roles) = tokio::try_join!(
            self.employee_repo.list_by_tenant(session.tenant_id),
            self.business_repo.list_by_tenant(session.tenant_id),
            self.role_repo.list_all(),
        )?;

        info!(
            tenant_id = session.tenant_id,
            employees = employees.len(),
            businesses = businesses.len(),
            roles = roles.len(),
            "directory loaded"
        );

        Ok(DirectorySnapshot {
            employees,
            businesses,
            roles,
        })
    }

    pub async fn list_employees(&self, session: &Session) -> Result<Vec<Employee>, DomainError> {
        self.employee_repo.list_by_tenant(session.tenant_id).await
    }

    /// Adding employees requires at least one business unit to pick codes from.
    pub fn ensure_can_add(businesses: &[BusinessUnit]) -> Result<(), DomainError> {
        if businesses.is_empty() {
            return Err(DomainError::NoBusinessUnits);
        }
        Ok(())
    }

    /// Username preview shown while the add form is filled in.
    pub async fn generate_username(
        &self,
        session: &Session,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, DomainError> {
        self.usernames
            .generate(session.tenant_id, first_name, last_name)
            .await
    }

    /// Validates and inserts a new employee. Returns the stored username.
    pub async fn add_employee(
        &self,
        session: &Session,
        draft: &EmployeeDraft,
    ) -> Result<String, DomainError> {
        if let Err(e) = validate_draft(draft) {
            warn!("Add employee rejected: {}", e);
            return Err(e);
        }

        let username = match draft.current_username() {
            Some(username) => username.to_string(),
            None => {
                self.usernames
                    .generate(session.tenant_id, &draft.first_name, &draft.last_name)
                    .await?
            }
        };

        // The initial secret is the username itself.
        let secret = if self.hash_new_secrets {
            let plain = username.clone();
            tokio::task::spawn_blocking(move || SecretService::hash(&plain))
                .await
                .map_err(|e| DomainError::InternalError(e.to_string()))??
        } else {
            username.clone()
        };

        let new_employee = NewEmployee::new(
            session.tenant_id,
            draft.first_name.clone(),
            draft.last_name.clone(),
            username.clone(),
            Some(draft.email.clone()),
            draft.phone.clone(),
            secret,
            draft.role.clone(),
            draft.bcode.clone(),
        )?;

        self.employee_repo.create(&new_employee).await.map_err(|e| {
            error!("Failed to add employee {}: {}", username, e);
            e
        })?;

        info!(
            tenant_id = session.tenant_id,
            actor = %session.username,
            email = %new_employee.email.as_deref().map(mask_email).unwrap_or_default(),
            phone = %mask_phone(&new_employee.phone),
            "employee {} added",
            username
        );
        Ok(username)
    }

    /// Validates and writes an edit. Returns the employee as stored afterwards.
    pub async fn update_employee(
        &self,
        session: &Session,
        original: &Employee,
        changes: &EmployeeChanges,
    ) -> Result<Employee, DomainError> {
        if original.is_admin() {
            warn!("Edit of tenant administrator {} refused", original.username);
            return Err(DomainError::AdminNotEditable);
        }

        if let Err(e) = validate_changes(changes) {
            warn!("Update of employee {} rejected: {}", original.id, e);
            return Err(e);
        }

        let username = self.usernames.reconcile(original, changes).await?;

        let update = EmployeeUpdate {
            first_name: changes.first_name.clone(),
            last_name: changes.last_name.clone(),
            username,
            email: Some(changes.email.clone()).filter(|e| !e.is_empty()),
            phone: changes.phone.clone(),
            role: changes.role.clone(),
            bcode: changes.bcode.clone(),
        };

        self.employee_repo
            .update(original.id, &update)
            .await
            .map_err(|e| {
                error!("Failed to update employee {}: {}", original.id, e);
                e
            })?;

        info!(
            tenant_id = session.tenant_id,
            actor = %session.username,
            "employee {} updated",
            original.id
        );
        Ok(update.apply_to(original))
    }
}
