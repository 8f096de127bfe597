//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub data_service: DataServiceSettings,
    pub security: SecuritySettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

/// Connection parameters of the hosted data service.
#[derive(Debug, Deserialize, Clone)]
pub struct DataServiceSettings {
    pub url: String,
    pub api_key: String,
    /// Request timeout in seconds, 0 disables it.
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecuritySettings {
    /// Store initial secrets of new employees as Argon2 hashes.
    pub hash_new_secrets: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub filter: String,
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Builder pre-populated with every optional setting.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "employee-console")?
            .set_default("data_service.timeout_seconds", 0)?
            .set_default("security.hash_new_secrets", false)?
            .set_default("telemetry.filter", "info")?
            .set_default("telemetry.json", false)
    }
}
