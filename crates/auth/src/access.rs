//! Access requests and gate configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{FORBIDDEN_ROUTE, Permission, PermissionSet};

/// How the required permissions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Every required permission must be granted.
    All,
    /// At least one required permission must be granted.
    Any,
}

/// Permissions a page asks for. Built ad hoc per page; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRequest {
    required: Vec<Permission>,
    require_all: bool,
}

impl AccessRequest {
    /// A single required permission.
    pub fn one(permission: impl Into<Permission>) -> Self {
        Self {
            required: vec![permission.into()],
            require_all: true,
        }
    }

    pub fn all_of<I, P>(permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            required: permissions.into_iter().map(Into::into).collect(),
            require_all: true,
        }
    }

    pub fn any_of<I, P>(permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            required: permissions.into_iter().map(Into::into).collect(),
            require_all: false,
        }
    }

    pub fn required(&self) -> &[Permission] {
        &self.required
    }

    pub fn require_all(&self) -> bool {
        self.require_all
    }

    pub fn mode(&self) -> MatchMode {
        if self.require_all { MatchMode::All } else { MatchMode::Any }
    }

    /// Plain set-membership check, ignoring the loading state.
    ///
    /// With `require_all` an empty requirement list is vacuously satisfied;
    /// with any-of it never is.
    pub fn is_satisfied_by(&self, granted: &PermissionSet) -> bool {
        let mut hits = self.required.iter().map(|p| granted.contains(p.as_str()));
        if self.require_all {
            hits.all(|h| h)
        } else {
            hits.any(|h| h)
        }
    }
}

impl From<&'static str> for AccessRequest {
    fn from(value: &'static str) -> Self {
        Self::one(value)
    }
}

impl<const N: usize> From<[&'static str; N]> for AccessRequest {
    fn from(value: [&'static str; N]) -> Self {
        Self::all_of(value)
    }
}

impl From<Vec<Permission>> for AccessRequest {
    fn from(value: Vec<Permission>) -> Self {
        Self::all_of(value)
    }
}

/// What to do while the permission list has not arrived yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Let the page render (fail-open).
    #[default]
    AllowWhileLoading,
    /// Render nothing and do not redirect until permissions are loaded.
    WaitForLoad,
}

/// Callback run on denial, before the redirect.
pub type OnDenied = Arc<dyn Fn(&AccessRequest) + Send + Sync>;

/// Full configuration of one permission gate.
///
/// Defaults: `require_all = true`, fallback `/forbidden`, no callback,
/// [`LoadPolicy::AllowWhileLoading`].
#[derive(Clone)]
pub struct AccessConfig {
    request: AccessRequest,
    fallback_route: String,
    on_denied: Option<OnDenied>,
    load_policy: LoadPolicy,
}

impl AccessConfig {
    pub fn new(request: impl Into<AccessRequest>) -> Self {
        Self {
            request: request.into(),
            fallback_route: FORBIDDEN_ROUTE.to_string(),
            on_denied: None,
            load_policy: LoadPolicy::default(),
        }
    }

    pub fn with_fallback(mut self, route: impl Into<String>) -> Self {
        self.fallback_route = route.into();
        self
    }

    pub fn with_on_denied<F>(mut self, f: F) -> Self
    where
        F: Fn(&AccessRequest) + Send + Sync + 'static,
    {
        self.on_denied = Some(Arc::new(f));
        self
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    pub fn request(&self) -> &AccessRequest {
        &self.request
    }

    pub fn fallback_route(&self) -> &str {
        &self.fallback_route
    }

    pub fn load_policy(&self) -> LoadPolicy {
        self.load_policy
    }

    pub(crate) fn notify_denied(&self) {
        if let Some(cb) = &self.on_denied {
            cb(&self.request);
        }
    }
}

impl core::fmt::Debug for AccessConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccessConfig")
            .field("request", &self.request)
            .field("fallback_route", &self.fallback_route)
            .field("on_denied", &self.on_denied.is_some())
            .field("load_policy", &self.load_policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AccessConfig::new("users.view");
        assert!(cfg.request().require_all());
        assert_eq!(cfg.fallback_route(), "/forbidden");
        assert_eq!(cfg.load_policy(), LoadPolicy::AllowWhileLoading);
        assert_eq!(cfg.request().required(), &[Permission::new("users.view")]);
    }

    #[test]
    fn empty_requirement_edge_cases() {
        let granted: PermissionSet = ["x"].into_iter().collect();
        assert!(AccessRequest::all_of(Vec::<Permission>::new()).is_satisfied_by(&granted));
        assert!(!AccessRequest::any_of(Vec::<Permission>::new()).is_satisfied_by(&granted));
    }

    #[test]
    fn array_conversion_requires_all() {
        let req = AccessRequest::from(["users.view", "users.edit"]);
        assert_eq!(req.mode(), MatchMode::All);
        assert_eq!(req.required().len(), 2);
    }
}
