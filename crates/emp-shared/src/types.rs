//! Common types

/// Identifier of a tenant (isolation boundary).
pub type TenantId = i64;

/// Primary key of a remote row.
pub type RecordId = i64;
