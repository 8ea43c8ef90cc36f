use std::borrow::{Borrow, Cow};
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are modeled as opaque strings (e.g. "users.view"). The console
/// never interprets their structure; it only tests membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Permission {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Permission {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Permissions granted to the current session.
///
/// An empty set means "not loaded yet": the backend never grants an empty
/// list to a signed-in employee, so emptiness doubles as the loading marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    pub fn insert(&mut self, permission: impl Into<Permission>) -> bool {
        self.0.insert(permission.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.0.iter()
    }

    /// Identifiers in lexical order (stable output for logs and the CLI).
    pub fn sorted(&self) -> Vec<String> {
        let mut out: Vec<String> = self.0.iter().map(|p| p.as_str().to_string()).collect();
        out.sort();
        out
    }
}

impl<P: Into<Permission>> FromIterator<P> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<Permission>> Extend<P> for PermissionSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_by_identifier() {
        let set: PermissionSet = ["users.view", "orders.view"].into_iter().collect();
        assert!(set.contains("users.view"));
        assert!(!set.contains("users.edit"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.sorted(), vec!["orders.view", "users.view"]);
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let set: PermissionSet = ["a.b"].into_iter().collect();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!(["a.b"]));
        let back: PermissionSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, set);
    }
}
