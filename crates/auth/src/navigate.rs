//! Navigation seam used by the gates.

/// Where unauthenticated visitors are sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Default target for permission denials.
pub const FORBIDDEN_ROUTE: &str = "/forbidden";

/// Performs redirects on behalf of a gate.
///
/// Gates never mutate application state; navigating is their only effect.
pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, route: &str) {
        (**self).navigate(route);
    }
}

/// What a gate lets the page do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render the wrapped content.
    Render,
    /// Render nothing and stay put (state not yet known).
    Pending,
    /// Render nothing; the navigator was sent to this route.
    Redirect(String),
}

impl GateOutcome {
    pub fn is_render(&self) -> bool {
        matches!(self, GateOutcome::Render)
    }
}
