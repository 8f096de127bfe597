// ============================================================================
// Employee Console Core - Authentication Service
// File: crates/emp-core/src/services/auth_service.rs
// ============================================================================
//! Credential check against the identities collection
//!
//! The lookup is by username only, not scoped to a tenant. When several
//! tenants share a username the first returned row decides.

use std::sync::Arc;

use emp_security::SecretService;
use tracing::{error, info, warn};

use crate::domain::Session;
use crate::error::DomainError;
use crate::repositories::EmployeeRepository;

/// Authentication service for the login screen
pub struct AuthService<R: EmployeeRepository> {
    employee_repo: Arc<R>,
}

impl<R: EmployeeRepository> AuthService<R> {
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }

    /// Login with username and secret
    pub async fn login(&self, username: &str, secret: &str) -> Result<Session, DomainError> {
        if username.trim().is_empty() || secret.is_empty() {
            return Err(DomainError::MissingCredentials);
        }

        info!("Login attempt for username: {}", username);

        // 1. Find employees by username
        let matches = self.employee_repo.find_by_username(username).await.map_err(|e| {
            error!("Login lookup failed for {}: {}", username, e);
            e
        })?;

        let employee = matches.first().ok_or_else(|| {
            warn!("Login failed: username not found: {}", username);
            DomainError::InvalidCredentials
        })?;

        if matches.len() > 1 {
            warn!(
                "Username {} exists in {} tenants, using tenant {}",
                username,
                matches.len(),
                employee.tenant_id
            );
        }

        // 2. Verify secret
        let stored = employee
            .password
            .as_deref()
            .ok_or(DomainError::InvalidCredentials)?;

        let valid = SecretService::verify(secret, stored).map_err(|e| {
            warn!("Secret verification error for {}: {}", username, e);
            DomainError::InvalidCredentials
        })?;

        if !valid {
            warn!("Login failed: invalid secret for: {}", username);
            return Err(DomainError::InvalidCredentials);
        }

        info!("Login successful for: {} (tenant {})", username, employee.tenant_id);
        Ok(Session::from(employee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::tests::employee;
    use crate::repositories::MockEmployeeRepository;

    fn jane() -> crate::domain::Employee {
        let mut jane = employee(11, "jane_doe", "jane", "doe");
        jane.tenant_id = 42;
        jane.role = "Manager".into();
        jane.password = Some("hunter2".into());
        jane
    }

    fn service_returning(rows: Vec<crate::domain::Employee>) -> AuthService<MockEmployeeRepository> {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_username()
            .withf(|username| username == "jane_doe")
            .returning(move |_| Ok(rows.clone()));
        AuthService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_login_success_returns_session() {
        let service = service_returning(vec![jane()]);

        let session = service.login("jane_doe", "hunter2").await.unwrap();
        assert_eq!(session.tenant_id, 42);
        assert_eq!(session.role, "Manager");
        assert_eq!(session.username, "jane_doe");
    }

    #[tokio::test]
    async fn test_wrong_secret_is_invalid() {
        let service = service_returning(vec![jane()]);

        let err = service.login("jane_doe", "hunter3").await.unwrap_err();
        assert_eq!(err, DomainError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_unknown_username_is_indistinguishable() {
        let service = service_returning(Vec::new());

        let err = service.login("jane_doe", "hunter2").await.unwrap_err();
        assert_eq!(err, DomainError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_first_match_decides() {
        let mut other_tenant = jane();
        other_tenant.tenant_id = 99;
        other_tenant.password = Some("different".into());
        let service = service_returning(vec![other_tenant, jane()]);

        assert_eq!(
            service.login("jane_doe", "hunter2").await.unwrap_err(),
            DomainError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_hashed_secret_is_verified() {
        let mut hashed = jane();
        hashed.password = Some(SecretService::hash("hunter2").unwrap());
        let service = service_returning(vec![hashed]);

        assert!(service.login("jane_doe", "hunter2").await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_credentials_skip_lookup() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_username().times(0);
        let service = AuthService::new(Arc::new(repo));

        assert_eq!(
            service.login("  ", "secret").await.unwrap_err(),
            DomainError::MissingCredentials
        );
        assert_eq!(
            service.login("jane_doe", "").await.unwrap_err(),
            DomainError::MissingCredentials
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_is_reported() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Err(DomainError::DataServiceError("connection refused".into())));
        let service = AuthService::new(Arc::new(repo));

        assert!(matches!(
            service.login("jane_doe", "hunter2").await,
            Err(DomainError::DataServiceError(_))
        ));
    }
}
