//! Session guard.

use crate::{GateOutcome, LOGIN_ROUTE, Navigator, Session};

/// Redirects unauthenticated visitors to the login route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGuard {
    login_route: String,
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new(LOGIN_ROUTE)
    }
}

impl SessionGuard {
    pub fn new(login_route: impl Into<String>) -> Self {
        Self {
            login_route: login_route.into(),
        }
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Until `hydrated`, nothing renders and nothing navigates.
    pub fn check<N: Navigator + ?Sized>(
        &self,
        hydrated: bool,
        session: &Session,
        navigator: &mut N,
    ) -> GateOutcome {
        if !hydrated {
            return GateOutcome::Pending;
        }
        if session.is_authenticated() {
            return GateOutcome::Render;
        }

        tracing::info!(login = %self.login_route, "no session; redirecting to login");
        navigator.navigate(&self.login_route);
        GateOutcome::Redirect(self.login_route.clone())
    }
}
