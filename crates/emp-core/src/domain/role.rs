//! Role lookup entry

use emp_shared::RecordId;
use serde::{Deserialize, Serialize};

/// Flat role list, no hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RecordId,
    pub role_name: String,
}
