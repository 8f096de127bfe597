//! Business Details ViewModel

use std::sync::Arc;

use eframe::egui;
use emp_core::domain::{BusinessUnit, Session};
use tokio::sync::mpsc;

use crate::events::{AppEvent, ConsoleEvent};
use crate::services::ConsoleServices;

pub struct BusinessViewModel {
    pub units: Vec<BusinessUnit>,
    pub is_loading: bool,
    pub error: Option<String>,
    services: Arc<ConsoleServices>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl BusinessViewModel {
    pub fn new(services: Arc<ConsoleServices>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            units: Vec::new(),
            is_loading: false,
            error: None,
            services,
            event_tx,
        }
    }

    pub fn load(&mut self, ctx: egui::Context, session: &Session) {
        self.is_loading = true;
        self.error = None;

        let session = session.clone();
        let services = Arc::clone(&self.services);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match services.business.list(&session).await {
                Ok(units) => ConsoleEvent::BusinessesLoaded(units),
                Err(e) => ConsoleEvent::BusinessesFailed(e.to_string()),
            };
            let _ = tx.send(AppEvent::console(session.tenant_id, event));
            ctx.request_repaint();
        });
    }

    pub fn on_loaded(&mut self, units: Vec<BusinessUnit>) {
        self.is_loading = false;
        self.units = units;
    }

    pub fn on_failed(&mut self, error: String) {
        self.is_loading = false;
        self.error = Some(error);
    }

    pub fn reset(&mut self) {
        self.units.clear();
        self.is_loading = false;
        self.error = None;
    }
}
