use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Named bundle of permission identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Permission catalogue entry (e.g. `users.view`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionEntry {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
}

impl PermissionEntry {
    /// Module prefix of the identifier when not given explicitly
    /// (`"users.view"` -> `"users"`).
    pub fn module_or_prefix(&self) -> &str {
        match &self.module {
            Some(m) => m,
            None => self.name.split('.').next().unwrap_or(&self.name),
        }
    }
}

/// Sidebar entry returned with the permission list after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub label: String,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub permission: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_falls_back_to_prefix() {
        let p = PermissionEntry {
            id: RecordId::generate(),
            name: "users.view".to_string(),
            description: None,
            module: None,
        };
        assert_eq!(p.module_or_prefix(), "users");

        let explicit = PermissionEntry {
            module: Some("staff".to_string()),
            ..p
        };
        assert_eq!(explicit.module_or_prefix(), "staff");
    }
}
