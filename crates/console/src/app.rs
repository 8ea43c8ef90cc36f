//! Console application state and page evaluation.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use backoffice_auth::{
    AccessConfig, AccessExplanation, AccessRequest, AuthzError, GateOutcome, Identity, Navigator,
    Session, SessionGuard, gate,
};
use backoffice_client::ApiClient;
use backoffice_client::endpoints::{access, auth, customers, delivery, marketing, orders, staff};
use backoffice_store::{AuthStore, FileStorage, SharedStorage, SidebarStore, Stores};

use crate::{
    ConsoleConfig, ConsoleError, ConsoleResult, HistoryNavigator, Protection, ResourceKind,
    RouteTable,
};

/// Result of visiting a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PageOutcome {
    Rendered { path: String, title: &'static str },
    /// Nothing rendered yet (session still hydrating or permissions loading).
    Pending { path: String },
    Redirected { from: String, to: String },
    NotFound { path: String },
}

/// The console: stores, API client, routes and navigator in one place.
pub struct Console {
    config: ConsoleConfig,
    client: ApiClient,
    auth: AuthStore,
    sidebar: SidebarStore,
    stores: Stores,
    routes: RouteTable,
    guard: SessionGuard,
    navigator: HistoryNavigator,
    /// Location and gate revision of the last evaluation.
    evaluated: Option<(String, u64)>,
}

impl Console {
    pub fn new(config: ConsoleConfig, storage: SharedStorage) -> ConsoleResult<Self> {
        let client = ApiClient::new(&config.api_url, config.request_timeout)?;
        let routes = RouteTable::standard(&config.login_route, &config.forbidden_route);
        let guard = SessionGuard::new(config.login_route.clone());

        Ok(Self {
            client,
            auth: AuthStore::new(storage.clone()),
            sidebar: SidebarStore::new(storage),
            stores: Stores::new(),
            routes,
            guard,
            navigator: HistoryNavigator::new(),
            evaluated: None,
            config,
        })
    }

    /// Console backed by file storage in the configured (or default) data dir.
    pub fn open(config: ConsoleConfig) -> ConsoleResult<Self> {
        let dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => FileStorage::default_dir()?,
        };
        let storage: SharedStorage = Arc::new(FileStorage::open(dir)?);
        Self::new(config, storage)
    }

    /// Read persisted session and sidebar; until then every guarded page is pending.
    ///
    /// Permissions only survive alongside the session they were granted to.
    pub fn hydrate(&mut self) {
        self.auth.hydrate();
        self.sidebar.hydrate();
        if !self.auth.is_authenticated() && self.sidebar.is_loaded() {
            tracing::warn!("discarding persisted permissions without a session");
            if let Err(err) = self.sidebar.clear() {
                tracing::warn!(error = %err, "failed to clear persisted sidebar");
            }
        }
        self.client.set_token(self.auth.token().map(str::to_string));
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn sidebar(&self) -> &SidebarStore {
        &self.sidebar
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn stores_mut(&mut self) -> &mut Stores {
        &mut self.stores
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn navigator(&self) -> &HistoryNavigator {
        &self.navigator
    }

    /// Sign in, persist the session, fetch permissions and go home.
    pub async fn login(&mut self, email: &str, password: &str) -> ConsoleResult<Identity> {
        let credentials = auth::Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let payload = auth::login(&self.client, &credentials).await?;

        // The previous session's grants and caches never carry over.
        self.sidebar.clear()?;
        self.stores.clear();
        self.auth
            .set_session(Session::new(payload.token.clone(), payload.user.clone()))?;
        self.client.set_token(Some(payload.token));
        tracing::info!(user = %payload.user.email, "signed in");

        if let Err(err) = self.load_sidebar().await {
            tracing::warn!(error = %err, "sidebar fetch failed; rolling back sign-in");
            self.client.set_token(None);
            self.auth.clear()?;
            return Err(err);
        }
        self.navigator.navigate(&self.config.home_route);
        Ok(payload.user)
    }

    /// Fetch the sidebar menu and the granted permission identifiers.
    pub async fn load_sidebar(&mut self) -> ConsoleResult<()> {
        let payload = auth::sidebar(&self.client).await?;
        self.sidebar
            .set_sidebar(payload.menu, payload.permissions.into_iter().collect())?;
        Ok(())
    }

    /// Sign out. Local state is cleared even if the backend call fails.
    pub async fn logout(&mut self) -> ConsoleResult<()> {
        if self.auth.is_authenticated() {
            if let Err(err) = auth::logout(&self.client).await {
                tracing::warn!(error = %err, "backend logout failed; clearing local session");
            }
        }

        self.auth.clear()?;
        self.sidebar.clear()?;
        self.stores.clear();
        self.client.set_token(None);
        self.navigator.navigate(&self.config.login_route);
        tracing::info!("signed out");
        Ok(())
    }

    /// Navigate to `path` and run its gates.
    pub fn visit(&mut self, path: &str) -> PageOutcome {
        self.navigator.navigate(path);
        self.evaluate(path)
    }

    /// Re-run the gates for the current location if the location, the
    /// session or the permissions changed since the last evaluation.
    pub fn refresh(&mut self) -> Option<PageOutcome> {
        let location = self.navigator.location()?.to_string();
        let current = (location, self.gate_revision());
        if self.evaluated.as_ref() == Some(&current) {
            return None;
        }
        Some(self.evaluate(&current.0))
    }

    fn gate_revision(&self) -> u64 {
        self.auth.revision() + self.sidebar.revision()
    }

    fn evaluate(&mut self, path: &str) -> PageOutcome {
        self.evaluated = Some((path.to_string(), self.gate_revision()));

        let Some(route) = self.routes.find(path) else {
            return PageOutcome::NotFound {
                path: path.to_string(),
            };
        };

        let hydrated = self.auth.is_hydrated();
        let outcome = match &route.protection {
            Protection::Public => GateOutcome::Render,
            Protection::Session => {
                self.guard
                    .check(hydrated, self.auth.session(), &mut self.navigator)
            }
            Protection::Permission(cfg) => {
                match self
                    .guard
                    .check(hydrated, self.auth.session(), &mut self.navigator)
                {
                    GateOutcome::Render => {
                        gate::check(cfg, self.sidebar.permissions(), &mut self.navigator)
                    }
                    other => other,
                }
            }
        };

        match outcome {
            GateOutcome::Render => PageOutcome::Rendered {
                path: path.to_string(),
                title: route.title,
            },
            GateOutcome::Pending => PageOutcome::Pending {
                path: path.to_string(),
            },
            GateOutcome::Redirect(to) => PageOutcome::Redirected {
                from: path.to_string(),
                to,
            },
        }
    }

    /// Explain the permission gate of the page at `path` (`None` if it has none).
    pub fn explain(&self, path: &str) -> ConsoleResult<Option<AccessExplanation>> {
        let route = self
            .routes
            .find(path)
            .ok_or_else(|| ConsoleError::UnknownRoute(path.to_string()))?;
        Ok(route
            .access()
            .map(|cfg| gate::explain(cfg, self.sidebar.permissions())))
    }

    /// Fetch a resource list, cache it in its store when it has one, and
    /// return it as JSON.
    ///
    /// Unlike page visits this acts on data, so it requires a session and
    /// loaded permissions.
    pub async fn list(&mut self, kind: ResourceKind) -> ConsoleResult<Value> {
        if !self.auth.is_authenticated() {
            return Err(AuthzError::Unauthenticated.into());
        }
        let required = AccessConfig::new(AccessRequest::one(kind.view_permission()));
        gate::authorize(&required, self.sidebar.permissions())?;

        let client = &self.client;
        let stores = &mut self.stores;
        let value = match kind {
            ResourceKind::Employees => serde_json::to_value(staff::list_employees(client).await?)?,
            ResourceKind::Customers => {
                serde_json::to_value(customers::list_customers(client).await?)?
            }
            ResourceKind::Orders => serde_json::to_value(orders::list_orders(client).await?)?,
            ResourceKind::Feedback => serde_json::to_value(orders::list_feedback(client).await?)?,
            ResourceKind::Roles => {
                stores.roles.set_items(access::list_roles(client).await?);
                serde_json::to_value(stores.roles.items())?
            }
            ResourceKind::Permissions => {
                stores
                    .permissions
                    .set_items(access::list_permissions(client).await?);
                serde_json::to_value(stores.permissions.items())?
            }
            ResourceKind::Banners => {
                stores.banners.set_items(marketing::list_banners(client).await?);
                serde_json::to_value(stores.banners.items())?
            }
            ResourceKind::Coupons => {
                stores.coupons.set_items(marketing::list_coupons(client).await?);
                serde_json::to_value(stores.coupons.items())?
            }
            ResourceKind::Offers => {
                stores.offers.set_items(marketing::list_offers(client).await?);
                serde_json::to_value(stores.offers.items())?
            }
            ResourceKind::Memberships => {
                stores
                    .membership_tiers
                    .set_items(marketing::list_membership_tiers(client).await?);
                serde_json::to_value(stores.membership_tiers.items())?
            }
            ResourceKind::DeliverySlots => {
                stores
                    .delivery_slots
                    .set_items(delivery::list_delivery_slots(client).await?);
                serde_json::to_value(stores.delivery_slots.items())?
            }
            ResourceKind::DeliveryAssignments => {
                stores
                    .delivery_assignments
                    .set_items(delivery::list_delivery_assignments(client).await?);
                serde_json::to_value(stores.delivery_assignments.items())?
            }
            ResourceKind::DocumentTypes => {
                stores
                    .document_types
                    .set_items(delivery::list_document_types(client).await?);
                serde_json::to_value(stores.document_types.items())?
            }
            ResourceKind::Contacts => {
                stores.contacts.set_items(customers::list_contacts(client).await?);
                serde_json::to_value(stores.contacts.items())?
            }
        };

        tracing::debug!(resource = %kind, "listed");
        Ok(value)
    }
}

impl core::fmt::Debug for Console {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Console")
            .field("api_url", &self.config.api_url)
            .field("auth", &self.auth)
            .field("sidebar", &self.sidebar)
            .field("location", &self.navigator.location())
            .finish()
    }
}
