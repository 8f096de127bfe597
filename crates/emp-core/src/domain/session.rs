//! Authenticated session and its holder
//!
//! The holder is owned by the application root and handed to the console
//! shell and panels explicitly.

use chrono::{DateTime, Utc};
use emp_shared::{RecordId, TenantId};
use serde::{Deserialize, Serialize};

use crate::domain::Employee;

/// Identity of the signed-in employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: RecordId,
    pub tenant_id: TenantId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: String,
    pub bcode: Vec<String>,
    pub signed_in_at: DateTime<Utc>,
}

impl From<&Employee> for Session {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            tenant_id: employee.tenant_id,
            username: employee.username.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role: employee.role.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            bcode: employee.bcode.clone(),
            signed_in_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionHolder {
    current: Option<Session>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, session: Session) {
        self.current = Some(session);
    }

    /// Clears the session, returning the one that was active.
    pub fn sign_out(&mut self) -> Option<Session> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::tests::employee;

    #[test]
    fn test_session_from_employee() {
        let session = Session::from(&employee(3, "jane_doe", "jane", "doe"));
        assert_eq!(session.tenant_id, 7);
        assert_eq!(session.role, "Cashier");
        assert_eq!(session.bcode, vec!["NY01".to_string()]);
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut holder = SessionHolder::new();
        assert!(holder.current().is_none());

        holder.sign_in(Session::from(&employee(1, "Admin_7", "Tenant", "Admin")));
        assert_eq!(holder.current().map(|s| s.tenant_id), Some(7));

        let previous = holder.sign_out();
        assert_eq!(previous.unwrap().username, "Admin_7");
        assert!(holder.current().is_none());
    }
}
