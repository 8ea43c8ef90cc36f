//! `backoffice-auth`: client-side access gates.
//!
//! Two checks wrap every page: the session guard (signed in?) and the
//! permission gate (allowed?). Both are pure decisions whose only effect is
//! a redirect through the injected [`Navigator`]. They are UX gates; the
//! backend still authorizes every API call.

pub mod access;
pub mod gate;
pub mod guard;
pub mod navigate;
pub mod permissions;
pub mod session;

pub use access::{AccessConfig, AccessRequest, LoadPolicy, MatchMode, OnDenied};
pub use gate::{AccessDecision, AccessExplanation, AuthzError, authorize, check, decide, explain};
pub use guard::SessionGuard;
pub use navigate::{FORBIDDEN_ROUTE, GateOutcome, LOGIN_ROUTE, Navigator};
pub use permissions::{Permission, PermissionSet};
pub use session::{Identity, IdentityKind, Session};
