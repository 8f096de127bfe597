//! Domain services (business logic)

pub mod validation;
pub mod search;
pub mod username_service;
pub mod auth_service;
pub mod directory_service;
pub mod business_service;

pub use username_service::UsernameService;
pub use auth_service::AuthService;
pub use directory_service::{DirectoryService, DirectorySnapshot};
pub use business_service::BusinessService;
