//! Employee Console - Desktop Application
//!
//! eGUI front end over the hosted data service, MVVM layout:
//! views render, view models own state and spawn remote calls,
//! results come back to the UI thread as `AppEvent`s.

mod app;
mod events;
mod services;
mod theme;
mod view;
mod viewmodel;

use anyhow::Context as _;
use app::ConsoleApp;
use emp_shared::config::AppConfig;
use emp_shared::telemetry::init_telemetry;
use services::ConsoleServices;
use tracing::info;

/// Login window size (width x height)
pub const LOGIN_SIZE: [f32; 2] = [420.0, 520.0];

/// Console window size once signed in
pub const CONSOLE_SIZE: [f32; 2] = [1180.0, 760.0];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_telemetry(&config.telemetry)?;

    info!(
        env = %config.app.env,
        data_service = %config.data_service.url,
        "Starting {}",
        config.app.name
    );

    let client = emp_infrastructure::create_client(&config.data_service)
        .context("failed to create data service client")?;
    let services = ConsoleServices::new(client, &config.security);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Management System")
            .with_inner_size(LOGIN_SIZE)
            .with_min_inner_size([360.0, 440.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Employee Management System",
        native_options,
        Box::new(move |cc| Ok(Box::new(ConsoleApp::new(cc, services)))),
    )
    .map_err(|e| anyhow::anyhow!("UI event loop failed: {}", e))
}
