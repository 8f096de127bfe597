//! Data service client construction

use std::sync::Arc;

use emp_shared::config::DataServiceSettings;
use tracing::info;

use super::client::RestClient;
use super::error::RestError;

/// Create the shared client - call ONCE at app startup
pub fn create_client(settings: &DataServiceSettings) -> Result<Arc<RestClient>, RestError> {
    let client = RestClient::new(settings)?;
    info!("Data service client ready for {}", settings.url);
    Ok(Arc::new(client))
}
