use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One physical storage unit assigned to a location.
///
/// The business unit code is unique among *active* warehouses only; archived
/// history may hold the same code. `archived_at == None` means active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub business_unit_code: String,
    pub location: String,
    pub capacity: u32,
    pub stock: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Warehouse {
    /// Build a candidate warehouse: timestamps unset until a use case
    /// activates it.
    pub fn new(
        business_unit_code: impl Into<String>,
        location: impl Into<String>,
        capacity: u32,
        stock: u32,
    ) -> Self {
        Self {
            business_unit_code: business_unit_code.into(),
            location: location.into(),
            capacity,
            stock,
            created_at: None,
            archived_at: None,
        }
    }

    /// Active means not yet archived. Archival is permanent.
    pub fn is_active(&self) -> bool {
        self.archived_at.is_none()
    }
}
