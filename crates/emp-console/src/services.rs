//! Service wiring for the console
//!
//! One REST client shared by every repository.

use std::sync::Arc;

use emp_core::services::{AuthService, BusinessService, DirectoryService};
use emp_infrastructure::{
    RestBusinessRepository, RestClient, RestEmployeeRepository, RestRoleRepository,
};
use emp_shared::config::SecuritySettings;

pub type ConsoleAuthService = AuthService<RestEmployeeRepository>;
pub type ConsoleDirectoryService =
    DirectoryService<RestEmployeeRepository, RestBusinessRepository, RestRoleRepository>;
pub type ConsoleBusinessService = BusinessService<RestBusinessRepository>;

pub struct ConsoleServices {
    pub auth: ConsoleAuthService,
    pub directory: ConsoleDirectoryService,
    pub business: ConsoleBusinessService,
}

impl ConsoleServices {
    pub fn new(client: Arc<RestClient>, security: &SecuritySettings) -> Arc<Self> {
        let employee_repo = Arc::new(RestEmployeeRepository::new(Arc::clone(&client)));
        let business_repo = Arc::new(RestBusinessRepository::new(Arc::clone(&client)));
        let role_repo = Arc::new(RestRoleRepository::new(client));

        Arc::new(Self {
            auth: AuthService::new(Arc::clone(&employee_repo)),
            directory: DirectoryService::new(
                employee_repo,
                Arc::clone(&business_repo),
                role_repo,
                security.hash_new_secrets,
            ),
            business: BusinessService::new(business_repo),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use emp_shared::config::DataServiceSettings;

    /// Services pointed at an address nothing listens on. Only for paths
    /// that never reach the network.
    pub fn offline_services() -> Arc<ConsoleServices> {
        let settings = DataServiceSettings {
            url: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
            timeout_seconds: 1,
        };
        let client = Arc::new(RestClient::new(&settings).unwrap());
        ConsoleServices::new(
            client,
            &SecuritySettings {
                hash_new_secrets: false,
            },
        )
    }
}
