//! Transport errors of the data service client

use emp_core::DomainError;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP {status}: {message}")]
    HttpError { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("invalid data service url: {0}")]
    InvalidUrl(String),
}

/// Error body returned by the service, e.g. `{"code":"23505","message":"duplicate key ..."}`.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    message: Option<String>,
}

impl RestError {
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ServiceErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.to_string());
        RestError::HttpError { status, message }
    }
}

impl From<RestError> for DomainError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::HttpError { message, .. } => DomainError::DataServiceError(message),
            other => DomainError::DataServiceError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_extracted_from_json_body() {
        let err = RestError::from_response_body(
            StatusCode::CONFLICT,
            r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
        );
        assert_eq!(
            DomainError::from(err),
            DomainError::DataServiceError("duplicate key value violates unique constraint".into())
        );
    }

    #[test]
    fn test_plain_body_is_kept() {
        let err = RestError::from_response_body(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: upstream down");
    }
}
