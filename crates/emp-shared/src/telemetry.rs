//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetrySettings;
use crate::error::AppError;

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_telemetry(settings: &TelemetrySettings) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json = settings.json;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer().with_target(true)))
        .try_init()
        .map_err(|e| AppError::TelemetryError(e.to_string()))
}
