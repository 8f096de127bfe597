//! Business unit entity

use emp_shared::{RecordId, TenantId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessUnit {
    pub id: RecordId,
    pub tenant_id: TenantId,
    /// Business code referenced by employees.
    pub bcode: String,
    pub business_name: String,
}

impl BusinessUnit {
    /// Label used in business-code pickers, e.g. `NY01 - Uptown Store`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.bcode, self.business_name)
    }
}
