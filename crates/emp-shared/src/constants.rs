//! Application-wide constants

/// Leave balance every new employee starts with.
pub const DEFAULT_PTO_BALANCE: i32 = 15;

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// The tenant administrator is stored as `Admin_<tenant_id>`.
pub const ADMIN_USERNAME_PREFIX: &str = "Admin_";

// Remote collections
pub const TABLE_EMPLOYEES: &str = "employees";
pub const TABLE_BUSINESS_DETAILS: &str = "business_details";
pub const TABLE_ROLES: &str = "roles_master";

/// Path prefix of the hosted data service REST surface.
pub const REST_PATH: &str = "rest/v1";
