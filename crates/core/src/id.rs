//! Record identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Identifier of a record held by the backend or cached locally.
///
/// The backend owns its own id format (opaque strings), so this is a string
/// newtype rather than a UUID. Locally generated ids are UUIDv7 strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh, time-ordered local identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CoreError::invalid_id("RecordId: empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unassigned id (records that have not been stored yet).
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self(String::new())
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_and_assigned() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
        assert!(!a.is_unassigned());
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(matches!(RecordId::new("  "), Err(CoreError::InvalidId(_))));
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::new("64f0c2").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"64f0c2\"");
    }
}
