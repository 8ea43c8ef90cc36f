//! Client-side state containers.
//!
//! Everything here is an explicit, injectable instance; there are no global
//! singletons. Only the session and the sidebar (menu + permissions) survive
//! restarts; the list caches are in-memory.

pub mod auth_store;
pub mod list;
pub mod persist;
pub mod sidebar_store;
pub mod stores;

pub use auth_store::AuthStore;
pub use list::{ListStore, StoreError};
pub use persist::{
    AUTH_STORAGE_KEY, FileStorage, KeyValueStorage, MemoryStorage, SIDEBAR_STORAGE_KEY,
    SharedStorage, StorageError,
};
pub use sidebar_store::SidebarStore;
pub use stores::Stores;
