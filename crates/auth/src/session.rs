//! Session model (token + identity held client-side).

use serde::{Deserialize, Serialize};

use backoffice_core::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    Admin,
    Employee,
}

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub kind: IdentityKind,
    #[serde(default)]
    pub role: Option<String>,
}

/// Authenticated-user context.
///
/// Both halves are optional so a half-written persisted entry can still be
/// read back; only a session with both is authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub identity: Option<Identity>,
}

impl Session {
    pub fn new(token: impl Into<String>, identity: Identity) -> Self {
        Self {
            token: Some(token.into()),
            identity: Some(identity),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.identity.is_some()
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.identity = None;
    }
}
