//! Login ViewModel
//!
//! Login form state with async credential check.

use std::sync::Arc;

use eframe::egui;
use emp_core::error::DomainError;
use tokio::sync::mpsc;

use crate::events::AppEvent;
use crate::services::ConsoleServices;

pub const MSG_LOGIN_FAILED: &str = "Login failed. Please try again.";

pub struct LoginViewModel {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub is_loading: bool,
    services: Arc<ConsoleServices>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl LoginViewModel {
    pub fn new(services: Arc<ConsoleServices>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            username: String::with_capacity(100),
            password: String::with_capacity(100),
            error: None,
            is_loading: false,
            services,
            event_tx,
        }
    }

    /// Attempt login - non-blocking async
    pub fn login(&mut self, ctx: egui::Context) {
        if self.is_loading {
            return;
        }

        let (username, password) = match self.submitted_credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        self.error = None;
        self.is_loading = true;

        let services = Arc::clone(&self.services);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match services.auth.login(&username, &password).await {
                Ok(session) => AppEvent::LoginSucceeded(session),
                Err(e) => AppEvent::LoginFailed(login_failure_message(&e)),
            };
            let _ = tx.send(event);
            ctx.request_repaint();
        });
    }

    /// Username goes to the lookup exactly as typed.
    fn submitted_credentials(&self) -> Result<(String, String), DomainError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(DomainError::MissingCredentials);
        }
        Ok((self.username.clone(), self.password.clone()))
    }

    pub fn on_login_success(&mut self) {
        self.is_loading = false;
        self.error = None;
        self.password.clear();
    }

    pub fn on_login_failed(&mut self, error: String) {
        self.is_loading = false;
        self.error = Some(error);
    }

    /// Back to an empty form after logout.
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
        self.error = None;
        self.is_loading = false;
    }
}

/// Credential problems keep their message; anything else is a generic retry hint.
pub fn login_failure_message(error: &DomainError) -> String {
    match error {
        DomainError::MissingCredentials | DomainError::InvalidCredentials => error.to_string(),
        _ => MSG_LOGIN_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::offline_services;

    fn vm() -> (LoginViewModel, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (LoginViewModel::new(offline_services(), tx), rx)
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            login_failure_message(&DomainError::InvalidCredentials),
            "Invalid username or password"
        );
        assert_eq!(
            login_failure_message(&DomainError::DataServiceError("connection refused".into())),
            MSG_LOGIN_FAILED
        );
    }

    #[test]
    fn test_blank_credentials_rejected_without_request() {
        let (mut vm, mut rx) = vm();
        vm.username = "   ".into();
        vm.password = "secret".into();

        vm.login(egui::Context::default());

        assert_eq!(vm.error.as_deref(), Some("Username and password are required"));
        assert!(!vm.is_loading);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_username_is_submitted_as_typed() {
        let (mut vm, _rx) = vm();
        vm.username = " jane_doe ".into();
        vm.password = "secret".into();

        let (username, password) = vm.submitted_credentials().unwrap();

        assert_eq!(username, " jane_doe ");
        assert_eq!(password, "secret");
    }

    #[test]
    fn test_success_clears_password() {
        let (mut vm, _rx) = vm();
        vm.username = "jane_doe".into();
        vm.password = "secret".into();
        vm.is_loading = true;

        vm.on_login_success();

        assert!(vm.password.is_empty());
        assert!(!vm.is_loading);
        assert_eq!(vm.username, "jane_doe");
    }
}
