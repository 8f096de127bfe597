//! Data service module (REST adapters)

pub mod client;
pub mod connection;
pub mod error;
pub mod query;
pub mod rest;

pub use client::RestClient;
pub use connection::create_client;
pub use error::RestError;
pub use query::TableQuery;
pub use rest::{RestBusinessRepository, RestEmployeeRepository, RestRoleRepository};
