use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::models::staff::default_true;

/// Bookable delivery window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySlot {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub label: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl DeliverySlot {
    pub fn contains(&self, t: NaiveTime) -> bool {
        self.start_time <= t && t < self.end_time
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Assigned,
    PickedUp,
    Delivered,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAssignment {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub order_id: RecordId,
    pub delivery_partner_id: RecordId,
    #[serde(default)]
    pub slot_id: Option<RecordId>,
    pub status: AssignmentStatus,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
}

/// Kind of document a delivery partner must upload (licence, ID, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentType {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_window_is_half_open() {
        let slot: DeliverySlot = serde_json::from_value(serde_json::json!({
            "_id": "s-1",
            "label": "Morning",
            "startTime": "08:00:00",
            "endTime": "11:00:00",
            "capacity": 20
        }))
        .unwrap();
        let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        assert!(slot.contains(at(8)));
        assert!(slot.contains(at(10)));
        assert!(!slot.contains(at(11)));
        assert!(slot.is_active);
    }
}
