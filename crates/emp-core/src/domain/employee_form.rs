//! Add/edit form state for the employee directory
//!
//! The draft tracks which names its username was generated for, so a late
//! username lookup for stale names is never applied.

use emp_shared::constants::DEFAULT_PTO_BALANCE;

use crate::domain::Employee;
use crate::services::validation::sanitize_phone;

/// State of the "Add Employee" form.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub bcode: Vec<String>,
    pub pto_balance: i32,
    username_names: Option<(String, String)>,
    dirty: bool,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            username: String::new(),
            email: String::new(),
            phone: String::new(),
            role: String::new(),
            bcode: Vec::new(),
            pto_balance: DEFAULT_PTO_BALANCE,
            username_names: None,
            dirty: false,
        }
    }
}

impl EmployeeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when a username should be generated for the new names.
    pub fn set_first_name(&mut self, value: &str) -> bool {
        self.first_name = value.to_string();
        self.dirty = true;
        self.can_generate_username()
    }

    /// Returns true when a username should be generated for the new names.
    pub fn set_last_name(&mut self, value: &str) -> bool {
        self.last_name = value.to_string();
        self.dirty = true;
        self.can_generate_username()
    }

    pub fn can_generate_username(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }

    /// Applies a generated username if it still belongs to the current names.
    pub fn apply_generated_username(&mut self, first_name: &str, last_name: &str, username: String) -> bool {
        if self.first_name != first_name || self.last_name != last_name {
            return false;
        }
        self.username = username;
        self.username_names = Some((first_name.to_string(), last_name.to_string()));
        true
    }

    /// Username generated for the names currently in the form, if any.
    pub fn current_username(&self) -> Option<&str> {
        match &self.username_names {
            Some((first, last)) if *first == self.first_name && *last == self.last_name => {
                Some(self.username.as_str())
            }
            _ => None,
        }
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.dirty = true;
    }

    /// Digits only, at most ten.
    pub fn set_phone(&mut self, value: &str) {
        self.phone = sanitize_phone(value);
        self.dirty = true;
    }

    pub fn set_role(&mut self, value: &str) {
        self.role = value.to_string();
        self.dirty = true;
    }

    pub fn toggle_business_code(&mut self, code: &str) {
        toggle_code(&mut self.bcode, code);
        self.dirty = true;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Editable copy of a stored employee.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub bcode: Vec<String>,
}

impl From<&Employee> for EmployeeChanges {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone().unwrap_or_default(),
            phone: employee.phone.clone(),
            role: employee.role.clone(),
            bcode: employee.bcode.clone(),
        }
    }
}

impl EmployeeChanges {
    /// True when either name differs from the stored employee.
    pub fn names_changed(&self, original: &Employee) -> bool {
        self.first_name != original.first_name || self.last_name != original.last_name
    }

    pub fn set_phone(&mut self, value: &str) {
        self.phone = sanitize_phone(value);
    }

    pub fn toggle_business_code(&mut self, code: &str) {
        toggle_code(&mut self.bcode, code);
    }
}

fn toggle_code(codes: &mut Vec<String>, code: &str) {
    if let Some(pos) = codes.iter().position(|c| c == code) {
        codes.remove(pos);
    } else {
        codes.push(code.to_string());
    }
}
