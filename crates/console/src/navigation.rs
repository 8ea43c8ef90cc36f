use serde::Serialize;

use backoffice_auth::Navigator;

/// In-process navigator: current location plus the trail that led there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryNavigator {
    location: Option<String>,
    history: Vec<String>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, route: &str) {
        if self.location.as_deref() == Some(route) {
            return;
        }
        tracing::debug!(to = route, "navigate");
        self.location = Some(route.to_string());
        self.history.push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_navigation_is_collapsed() {
        let mut nav = HistoryNavigator::new();
        nav.navigate("/dashboard");
        nav.navigate("/dashboard");
        nav.navigate("/login");
        assert_eq!(nav.location(), Some("/login"));
        assert_eq!(nav.history(), &["/dashboard", "/login"]);
    }
}
