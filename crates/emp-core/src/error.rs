//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Username and password are required")]
    MissingCredentials,

    /// Unknown username and wrong secret share this variant.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    ValidationError(String),

    #[error("Please add at least one business before adding employees")]
    NoBusinessUnits,

    #[error("The tenant administrator cannot be edited")]
    AdminNotEditable,

    #[error("Secret error: {0}")]
    SecretError(String),

    #[error("Data service error: {0}")]
    DataServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn validation(message: &str) -> Self {
        DomainError::ValidationError(message.to_string())
    }

    /// True when the action was refused before any remote call.
    pub fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            DomainError::MissingCredentials
                | DomainError::ValidationError(_)
                | DomainError::NoBusinessUnits
                | DomainError::AdminNotEditable
        )
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}

impl From<emp_security::secret::SecretError> for DomainError {
    fn from(error: emp_security::secret::SecretError) -> Self {
        DomainError::SecretError(error.to_string())
    }
}
