//! # Employee Console Security
//!
//! Secret hashing and verification for employee credentials.

pub mod secret;

pub use secret::{SecretFormat, SecretService};
