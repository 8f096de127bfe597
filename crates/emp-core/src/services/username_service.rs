// ============================================================================
// Employee Console Core - Username Service
// File: crates/emp-core/src/services/username_service.rs
// ============================================================================
//! Username generation and edit reconciliation
//!
//! Candidates are fetched with a remote prefix match (`first_last*`), which
//! over-matches (`john_smithson`, and `_` is a LIKE wildcard). Collisions are
//! then decided by exact equality against that fetched set.

use std::sync::Arc;

use emp_shared::TenantId;
use tracing::{debug, info};

use crate::domain::{Employee, EmployeeChanges};
use crate::error::DomainError;
use crate::repositories::EmployeeRepository;

pub fn base_username(first_name: &str, last_name: &str) -> String {
    format!("{}_{}", first_name, last_name)
}

/// First of `base`, `base1`, `base2`, … not present in `existing`.
pub fn next_available_username(base: &str, existing: &[String]) -> String {
    let taken = |candidate: &str| existing.iter().any(|u| u == candidate);

    let mut candidate = base.to_string();
    let mut counter: u64 = 1;
    while taken(&candidate) {
        candidate = format!("{}{}", base, counter);
        counter += 1;
    }
    candidate
}

pub struct UsernameService<R: EmployeeRepository> {
    employee_repo: Arc<R>,
}

impl<R: EmployeeRepository> UsernameService<R> {
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }

    /// Username unique within the tenant for the given names.
    pub async fn generate(
        &self,
        tenant_id: TenantId,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, DomainError> {
        let base = base_username(first_name, last_name);
        let existing = self
            .employee_repo
            .find_usernames_by_prefix(tenant_id, &base)
            .await?;

        if existing.is_empty() {
            debug!(%base, "no usernames share the base");
            return Ok(base);
        }

        let username = next_available_username(&base, &existing);
        debug!(%base, %username, candidates = existing.len(), "resolved username collision");
        Ok(username)
    }

    /// Username to store after an edit: unchanged unless a name changed.
    pub async fn reconcile(
        &self,
        original: &Employee,
        changes: &EmployeeChanges,
    ) -> Result<String, DomainError> {
        if !changes.names_changed(original) {
            return Ok(original.username.clone());
        }

        let username = self
            .generate(original.tenant_id, &changes.first_name, &changes.last_name)
            .await?;
        info!(
            employee_id = original.id,
            from = %original.username,
            to = %username,
            "username regenerated after name change"
        );
        Ok(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::tests::employee;
    use crate::repositories::MockEmployeeRepository;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn service_with(existing: &'static [&'static str]) -> UsernameService<MockEmployeeRepository> {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_usernames_by_prefix()
            .returning(move |_, _| Ok(names(existing)));
        UsernameService::new(Arc::new(repo))
    }

    #[test]
    fn test_next_available_username() {
        assert_eq!(next_available_username("john_smith", &[]), "john_smith");
        assert_eq!(
            next_available_username("john_smith", &names(&["john_smith", "john_smith1"])),
            "john_smith2"
        );
        // Gaps are filled in order.
        assert_eq!(
            next_available_username("john_smith", &names(&["john_smith", "john_smith2"])),
            "john_smith1"
        );
    }

    #[test]
    fn test_prefix_overmatch_does_not_collide() {
        let fetched = names(&["john_smithson", "john_smith_jr"]);
        assert_eq!(next_available_username("john_smith", &fetched), "john_smith");
    }

    #[tokio::test]
    async fn test_generate_without_existing_usernames() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_usernames_by_prefix()
            .withf(|tenant_id, prefix| *tenant_id == 7 && prefix == "jane_doe")
            .times(1)
            .returning(|_, _| Ok(Vec::new()));
        let service = UsernameService::new(Arc::new(repo));

        assert_eq!(service.generate(7, "jane", "doe").await.unwrap(), "jane_doe");
    }

    #[tokio::test]
    async fn test_generate_appends_next_suffix() {
        let service = service_with(&["john_smith", "john_smith1"]);
        assert_eq!(service.generate(7, "john", "smith").await.unwrap(), "john_smith2");
    }

    #[tokio::test]
    async fn test_generate_propagates_remote_failure() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_usernames_by_prefix()
            .returning(|_, _| Err(DomainError::DataServiceError("offline".into())));
        let service = UsernameService::new(Arc::new(repo));

        assert!(matches!(
            service.generate(7, "jane", "doe").await,
            Err(DomainError::DataServiceError(_))
        ));
    }

    #[tokio::test]
    async fn test_reconcile_keeps_username_without_name_change() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_usernames_by_prefix().times(0);
        let service = UsernameService::new(Arc::new(repo));

        let stored = employee(5, "jane_doe1", "jane", "doe");
        let mut changes = EmployeeChanges::from(&stored);
        changes.phone = "5550001111".into();
        changes.email = "jane@corp.com".into();
        changes.role = "Manager".into();

        assert_eq!(service.reconcile(&stored, &changes).await.unwrap(), "jane_doe1");
    }

    #[tokio::test]
    async fn test_reconcile_regenerates_after_name_change() {
        let service = service_with(&["jane_smith"]);

        let stored = employee(5, "jane_doe", "jane", "doe");
        let mut changes = EmployeeChanges::from(&stored);
        changes.last_name = "smith".into();

        assert_eq!(service.reconcile(&stored, &changes).await.unwrap(), "jane_smith1");
    }
}
