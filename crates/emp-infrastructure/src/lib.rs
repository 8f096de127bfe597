//! # Employee Console Infrastructure
//!
//! Hosted data service implementations (adapters) of the core repository traits.

pub mod data_service;

pub use data_service::{
    create_client, RestBusinessRepository, RestClient, RestEmployeeRepository, RestError,
    RestRoleRepository,
};
