use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::models::staff::default_true;

/// Paid membership tier offered to customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipTier {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    pub duration_days: u32,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
