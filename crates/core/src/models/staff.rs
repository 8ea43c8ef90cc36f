use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, RecordId};

/// Back-office employee account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
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
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /v1/employee/create-employee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl NewEmployee {
    /// Reject obviously unusable input before it reaches the backend.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("employee name must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(CoreError::validation("employee email must contain '@'"));
        }
        if self.password.len() < 8 {
            return Err(CoreError::validation(
                "employee password must be at least 8 characters",
            ));
        }
        Ok(())
    }
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee() -> NewEmployee {
        NewEmployee {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "correct-horse".to_string(),
            phone: None,
            role: Some("manager".to_string()),
        }
    }

    #[test]
    fn employee_accepts_backend_id_field() {
        let e: Employee = serde_json::from_value(serde_json::json!({
            "_id": "e-1",
            "name": "Asha",
            "email": "asha@example.com"
        }))
        .unwrap();
        assert_eq!(e.id.as_str(), "e-1");
        assert!(e.is_active);
    }

    #[test]
    fn new_employee_validation() {
        assert!(new_employee().validate().is_ok());

        let mut bad = new_employee();
        bad.email = "nope".to_string();
        assert!(matches!(bad.validate(), Err(CoreError::Validation(_))));

        let mut short = new_employee();
        short.password = "short".to_string();
        assert!(short.validate().is_err());
    }

    #[test]
    fn new_employee_omits_absent_optionals() {
        let json = serde_json::to_value(new_employee()).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["role"], "manager");
    }
}
