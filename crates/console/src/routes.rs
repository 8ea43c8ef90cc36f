//! Console pages and the gates wrapping each one.

use backoffice_auth::{AccessConfig, AccessRequest};

/// Gates in front of a page.
#[derive(Debug, Clone)]
pub enum Protection {
    /// No gate.
    Public,
    /// Session guard only.
    Session,
    /// Session guard, then the permission gate.
    Permission(AccessConfig),
}

#[derive(Debug, Clone)]
pub struct Route {
    /// Path pattern; `:name` segments match any single segment.
    pub pattern: String,
    pub title: &'static str,
    pub protection: Protection,
}

impl Route {
    pub fn public(pattern: impl Into<String>, title: &'static str) -> Self {
        Self {
            pattern: pattern.into(),
            title,
            protection: Protection::Public,
        }
    }

    pub fn session(pattern: impl Into<String>, title: &'static str) -> Self {
        Self {
            pattern: pattern.into(),
            title,
            protection: Protection::Session,
        }
    }

    pub fn permission(
        pattern: impl Into<String>,
        title: &'static str,
        request: impl Into<AccessRequest>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            title,
            protection: Protection::Permission(AccessConfig::new(request)),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let mut want = self.pattern.trim_matches('/').split('/');
        let mut got = path.trim_matches('/').split('/');
        loop {
            match (want.next(), got.next()) {
                (None, None) => return true,
                (Some(w), Some(g)) if w.starts_with(':') && !g.is_empty() => continue,
                (Some(w), Some(g)) if w == g => continue,
                _ => return false,
            }
        }
    }

    fn with_fallback(mut self, route: &str) -> Self {
        self.protection = match self.protection {
            Protection::Permission(cfg) => Protection::Permission(cfg.with_fallback(route)),
            other => other,
        };
        self
    }

    /// Permission gate config, if the page has one.
    pub fn access(&self) -> Option<&AccessConfig> {
        match &self.protection {
            Protection::Permission(cfg) => Some(cfg),
            Protection::Public | Protection::Session => None,
        }
    }
}

/// Ordered route table; the first matching pattern wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Every page of the console. Permission denials go to `forbidden_route`.
    pub fn standard(login_route: &str, forbidden_route: &str) -> Self {
        let routes = vec![
            Route::public(login_route, "Sign in"),
            Route::public(forbidden_route, "Forbidden"),
            Route::session("/dashboard", "Dashboard"),
            Route::permission("/employees/create", "New employee", "employees.create"),
            Route::permission("/employees/:id/edit", "Edit employee", "employees.edit"),
            Route::permission("/employees/:id", "Employee", "employees.view"),
            Route::permission("/employees", "Employees", "employees.view"),
            Route::permission("/customers/:id", "Customer", "customers.view"),
            Route::permission("/customers", "Customers", "customers.view"),
            Route::permission("/banners", "Banners", "banners.view"),
            Route::permission("/coupons", "Coupons", "coupons.view"),
            Route::permission("/offers", "Offers", "offers.view"),
            Route::permission("/memberships", "Memberships", "memberships.view"),
            Route::permission("/orders/:id", "Order", "orders.view"),
            Route::permission("/orders", "Orders", "orders.view"),
            Route::permission("/feedback", "Feedback", "feedback.view"),
            Route::permission("/roles", "Roles", "roles.view"),
            Route::permission(
                "/permissions",
                "Permissions",
                AccessRequest::any_of(["permissions.view", "roles.edit"]),
            ),
            Route::permission("/delivery/slots", "Delivery slots", "delivery.view"),
            Route::permission(
                "/delivery/assignments",
                "Delivery assignments",
                AccessRequest::any_of(["delivery.view", "delivery.assign"]),
            ),
            Route::permission("/documents", "Document types", "documents.view"),
            Route::permission("/contacts", "Contacts", "contacts.view"),
        ];

        Self::new(
            routes
                .into_iter()
                .map(|route| route.with_fallback(forbidden_route))
                .collect(),
        )
    }

    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.matches(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::standard("/login", "/forbidden")
    }

    #[test]
    fn static_and_dynamic_segments() {
        let t = table();
        assert_eq!(t.find("/employees").unwrap().title, "Employees");
        assert_eq!(t.find("/employees/").unwrap().title, "Employees");
        assert_eq!(t.find("/employees/create").unwrap().title, "New employee");
        assert_eq!(t.find("/employees/e-42").unwrap().title, "Employee");
        assert_eq!(t.find("/employees/e-42/edit").unwrap().title, "Edit employee");
        assert_eq!(t.find("/orders/o-1?tab=items").unwrap().title, "Order");
        assert!(t.find("/nowhere").is_none());
        assert!(t.find("/orders/o-1/extra").is_none());
    }

    #[test]
    fn custom_forbidden_route_reaches_every_gate() {
        let t = RouteTable::standard("/sign-in", "/denied");
        assert!(t.find("/sign-in").is_some());
        assert!(
            t.iter()
                .filter_map(Route::access)
                .all(|cfg| cfg.fallback_route() == "/denied")
        );
    }

    #[test]
    fn protection_levels() {
        let t = table();
        assert!(matches!(t.find("/login").unwrap().protection, Protection::Public));
        assert!(matches!(t.find("/dashboard").unwrap().protection, Protection::Session));

        let perms = t.find("/permissions").unwrap().access().unwrap();
        assert!(!perms.request().require_all());
        assert_eq!(perms.fallback_route(), "/forbidden");
    }
}
