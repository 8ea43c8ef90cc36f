//! Permission gate.
//!
//! Pure decision first ([`decide`]), then the navigating wrapper ([`check`]).
//! [`explain`] reports the same decision in an auditable shape.

use serde::Serialize;
use thiserror::Error;

use crate::{AccessConfig, GateOutcome, LoadPolicy, MatchMode, Navigator, PermissionSet};

/// Result of evaluating an [`AccessConfig`] against the granted permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    Allow,
    Deny,
    /// Permissions not loaded and the gate was told to wait.
    Wait,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("not signed in")]
    Unauthenticated,

    #[error("forbidden: missing permission(s) {0:?}")]
    Forbidden(Vec<String>),

    #[error("permissions not loaded yet")]
    NotLoaded,
}

/// Decide without side effects.
///
/// - empty set: allow ([`LoadPolicy::AllowWhileLoading`]) or wait
/// - otherwise: all-of / any-of membership per the request
pub fn decide(config: &AccessConfig, granted: &PermissionSet) -> AccessDecision {
    if granted.is_empty() {
        return match config.load_policy() {
            LoadPolicy::AllowWhileLoading => AccessDecision::Allow,
            LoadPolicy::WaitForLoad => AccessDecision::Wait,
        };
    }

    if config.request().is_satisfied_by(granted) {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny
    }
}

/// Run the gate: on deny, fire the callback and redirect to the fallback route.
pub fn check<N: Navigator + ?Sized>(
    config: &AccessConfig,
    granted: &PermissionSet,
    navigator: &mut N,
) -> GateOutcome {
    match decide(config, granted) {
        AccessDecision::Allow => GateOutcome::Render,
        AccessDecision::Wait => GateOutcome::Pending,
        AccessDecision::Deny => {
            let explanation = explain(config, granted);
            tracing::warn!(
                missing = ?explanation.missing,
                fallback = config.fallback_route(),
                "access denied"
            );
            config.notify_denied();
            navigator.navigate(config.fallback_route());
            GateOutcome::Redirect(config.fallback_route().to_string())
        }
    }
}

/// Non-navigating variant for callers that act rather than render.
///
/// Unlike [`check`], an empty set is never treated as a grant here.
pub fn authorize(config: &AccessConfig, granted: &PermissionSet) -> Result<(), AuthzError> {
    if granted.is_empty() {
        return Err(AuthzError::NotLoaded);
    }
    if config.request().is_satisfied_by(granted) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(explain(config, granted).missing))
    }
}

/// Detailed explanation of a gate decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    /// Whether the gate lets the page render.
    pub granted: bool,
    pub decision: AccessDecision,
    pub reason: String,
    pub mode: MatchMode,
    pub required: Vec<String>,
    /// Required permissions that are granted.
    pub matched: Vec<String>,
    /// Required permissions that are not granted.
    pub missing: Vec<String>,
    pub permissions_loaded: bool,
    pub fallback_route: String,
}

/// Explain why the gate would allow or deny.
pub fn explain(config: &AccessConfig, granted: &PermissionSet) -> AccessExplanation {
    let request = config.request();
    let required: Vec<String> = request.required().iter().map(|p| p.to_string()).collect();
    let (matched, missing): (Vec<String>, Vec<String>) =
        required.iter().cloned().partition(|p| granted.contains(p));

    let decision = decide(config, granted);
    let reason = match decision {
        AccessDecision::Allow if granted.is_empty() => {
            "permissions not loaded yet; allowing while loading".to_string()
        }
        AccessDecision::Wait => "permissions not loaded yet; waiting".to_string(),
        AccessDecision::Allow => match request.mode() {
            MatchMode::All => "all required permissions granted".to_string(),
            MatchMode::Any => format!("granted via {:?}", matched),
        },
        AccessDecision::Deny => match request.mode() {
            MatchMode::All => format!("missing required permission(s) {:?}", missing),
            MatchMode::Any => format!("none of {:?} granted", required),
        },
    };

    AccessExplanation {
        granted: decision == AccessDecision::Allow,
        decision,
        reason,
        mode: request.mode(),
        required,
        matched,
        missing,
        permissions_loaded: !granted.is_empty(),
        fallback_route: config.fallback_route().to_string(),
    }
}
