// ============================================================================
// Employee Console Core - Employee Entity
// File: crates/emp-core/src/domain/employee.rs
// Description: Employee (identity) entity plus insert/update payloads
// ============================================================================

use emp_shared::constants::{ADMIN_USERNAME_PREFIX, DEFAULT_PTO_BALANCE};
use emp_shared::{RecordId, TenantId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee as stored in the identities collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub tenant_id: TenantId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: String,
    pub bcode: Vec<String>,
    pub pto_balance: i32,

    /// Stored secret, plain text or a salted hash.
    #[serde(skip_serializing)]
    pub password: Option<String>,

    pub profile_picture: Option<String>,
}

impl Employee {
    pub fn admin_username(tenant_id: TenantId) -> String {
        format!("{}{}", ADMIN_USERNAME_PREFIX, tenant_id)
    }

    /// The tenant administrator is listed but never editable.
    pub fn is_admin(&self) -> bool {
        self.username == Self::admin_username(self.tenant_id)
    }

    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => self.username.clone(),
        }
    }

    /// Case-insensitive match on names, username and email; plain substring on phone.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
            || self.username.to_lowercase().contains(&needle)
            || self
                .email
                .as_deref()
                .map(|e| e.to_lowercase().contains(&needle))
                .unwrap_or(false)
            || self.phone.contains(query)
    }

    pub fn business_codes_display(&self) -> String {
        if self.bcode.is_empty() {
            "-".to_string()
        } else {
            self.bcode.join(", ")
        }
    }
}

/// Row inserted when an employee is created.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewEmployee {
    pub tenant_id: TenantId,

    #[validate(length(min = 1, message = "First name and last name are required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "First name and last name are required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub email: Option<String>,

    #[validate(length(equal = 10, message = "Phone number must be exactly 10 digits"))]
    pub phone: String,

    pub password: String,

    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,

    #[validate(length(min = 1, message = "At least one business code is required"))]
    pub bcode: Vec<String>,

    pub pto_balance: i32,
}

impl NewEmployee {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tenant_id: TenantId,
        first_name: String,
        last_name: String,
        username: String,
        email: Option<String>,
        phone: String,
        password: String,
        role: String,
        bcode: Vec<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let employee = Self {
            tenant_id,
            first_name,
            last_name,
            username,
            email: email.filter(|e| !e.is_empty()),
            phone,
            password,
            role,
            bcode,
            pto_balance: DEFAULT_PTO_BALANCE,
        };

        employee.validate()?;
        Ok(employee)
    }
}

/// Fields written when an employee is edited. Leave balance and secret are untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeUpdate {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: Option<String>,
    pub phone: String,
    pub role: String,
    pub bcode: Vec<String>,
}

impl EmployeeUpdate {
    /// Applies the update to a copy of `employee`.
    pub fn apply_to(&self, employee: &Employee) -> Employee {
        Employee {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            role: self.role.clone(),
            bcode: self.bcode.clone(),
            ..employee.clone()
        }
    }
}
