//! Client-side validation for employee forms
//!
//! Checks run in a fixed order and stop at the first failure, so the user
//! sees exactly one message per attempt.

use std::sync::LazyLock;

use emp_shared::constants::PHONE_DIGITS;
use regex::Regex;

use crate::domain::{EmployeeChanges, EmployeeDraft};
use crate::error::DomainError;

pub const MSG_NAMES_REQUIRED: &str = "First name and last name are required";
pub const MSG_INVALID_PHONE: &str = "Phone number must be exactly 10 digits";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_ROLE_REQUIRED: &str = "Please select a role";
pub const MSG_BCODE_REQUIRED: &str = "Please select at least one Business Code";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Input-time filter: digits only, truncated to ten.
pub fn sanitize_phone(input: &str) -> String {
    strip_non_digits(input).chars().take(PHONE_DIGITS).collect()
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

/// Empty is accepted, the field is optional.
pub fn is_valid_email(email: &str) -> bool {
    email.is_empty() || EMAIL_PATTERN.is_match(email)
}

pub fn validate_draft(draft: &EmployeeDraft) -> Result<(), DomainError> {
    if draft.first_name.is_empty() || draft.last_name.is_empty() {
        return Err(DomainError::validation(MSG_NAMES_REQUIRED));
    }
    if !is_valid_phone(&draft.phone) {
        return Err(DomainError::validation(MSG_INVALID_PHONE));
    }
    if !is_valid_email(&draft.email) {
        return Err(DomainError::validation(MSG_INVALID_EMAIL));
    }
    if draft.role.is_empty() {
        return Err(DomainError::validation(MSG_ROLE_REQUIRED));
    }
    if draft.bcode.is_empty() {
        return Err(DomainError::validation(MSG_BCODE_REQUIRED));
    }
    Ok(())
}

pub fn validate_changes(changes: &EmployeeChanges) -> Result<(), DomainError> {
    if changes.first_name.is_empty() || changes.last_name.is_empty() {
        return Err(DomainError::validation(MSG_NAMES_REQUIRED));
    }
    if !is_valid_phone(&changes.phone) {
        return Err(DomainError::validation(MSG_INVALID_PHONE));
    }
    if !is_valid_email(&changes.email) {
        return Err(DomainError::validation(MSG_INVALID_EMAIL));
    }
    if changes.bcode.is_empty() {
        return Err(DomainError::validation(MSG_BCODE_REQUIRED));
    }
    Ok(())
}
