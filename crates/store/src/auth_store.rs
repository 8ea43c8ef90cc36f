//! Session state persisted under [`AUTH_STORAGE_KEY`].

use backoffice_auth::{Identity, Session};

use crate::persist::{self, AUTH_STORAGE_KEY, SharedStorage, StorageError};

const AUTH_STATE_VERSION: u32 = 1;

/// Holds the session token and identity.
///
/// Starts un-hydrated; [`AuthStore::hydrate`] reads persistent storage once
/// and flips the flag whether or not a session was found.
pub struct AuthStore {
    storage: SharedStorage,
    session: Session,
    hydrated: bool,
    revision: u64,
}

impl AuthStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            storage,
            session: Session::default(),
            hydrated: false,
            revision: 0,
        }
    }

    /// Load the persisted session. Unreadable state hydrates as signed out.
    pub fn hydrate(&mut self) {
        let loaded = persist::load::<Session>(&*self.storage, AUTH_STORAGE_KEY, AUTH_STATE_VERSION);
        self.session = match loaded {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable persisted session");
                Session::default()
            }
        };
        self.hydrated = true;
        self.revision += 1;
        tracing::info!(
            authenticated = self.session.is_authenticated(),
            "auth state hydrated"
        );
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.bearer_token()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Store a freshly established session and persist it.
    ///
    /// Setting a session also counts as hydration: nothing older can override it.
    pub fn set_session(&mut self, session: Session) -> Result<(), StorageError> {
        persist::save(&*self.storage, AUTH_STORAGE_KEY, AUTH_STATE_VERSION, &session)?;
        self.session = session;
        self.hydrated = true;
        self.revision += 1;
        Ok(())
    }

    /// Drop the session in memory and in storage.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.session.clear();
        self.revision += 1;
        self.storage.remove(AUTH_STORAGE_KEY)
    }
}

impl core::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AuthStore")
            .field("authenticated", &self.session.is_authenticated())
            .field("hydrated", &self.hydrated)
            .field("revision", &self.revision)
            .finish()
    }
}
