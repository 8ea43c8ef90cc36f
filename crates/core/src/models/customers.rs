use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub membership_tier: Option<RecordId>,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Inbound "contact us" message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
