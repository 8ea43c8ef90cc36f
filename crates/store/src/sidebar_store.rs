//! Sidebar menu and granted permissions, persisted under [`SIDEBAR_STORAGE_KEY`].

use serde::{Deserialize, Serialize};

use backoffice_auth::PermissionSet;
use backoffice_core::models::MenuItem;

use crate::persist::{self, SIDEBAR_STORAGE_KEY, SharedStorage, StorageError};

const SIDEBAR_STATE_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SidebarState {
    menu: Vec<MenuItem>,
    permissions: PermissionSet,
}

/// The permission store: what the signed-in user may do, and the menu
/// that came with it.
pub struct SidebarStore {
    storage: SharedStorage,
    state: SidebarState,
    revision: u64,
}

impl SidebarStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            storage,
            state: SidebarState::default(),
            revision: 0,
        }
    }

    pub fn hydrate(&mut self) {
        let loaded =
            persist::load::<SidebarState>(&*self.storage, SIDEBAR_STORAGE_KEY, SIDEBAR_STATE_VERSION);
        self.state = match loaded {
            Ok(state) => state.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable persisted sidebar");
                SidebarState::default()
            }
        };
        self.revision += 1;
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.state.permissions
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.state.menu
    }

    pub fn is_loaded(&self) -> bool {
        !self.state.permissions.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace menu and permissions with a fresh server response.
    pub fn set_sidebar(
        &mut self,
        menu: Vec<MenuItem>,
        permissions: PermissionSet,
    ) -> Result<(), StorageError> {
        let state = SidebarState { menu, permissions };
        persist::save(&*self.storage, SIDEBAR_STORAGE_KEY, SIDEBAR_STATE_VERSION, &state)?;
        tracing::info!(
            permissions = state.permissions.len(),
            menu_items = state.menu.len(),
            "sidebar loaded"
        );
        self.state = state;
        self.revision += 1;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.state = SidebarState::default();
        self.revision += 1;
        self.storage.remove(SIDEBAR_STORAGE_KEY)
    }

    /// Menu entries the user may see. Entries without a permission are
    /// always shown; groups left with nothing to open are dropped. Before
    /// permissions load, everything is shown.
    pub fn visible_menu(&self) -> Vec<MenuItem> {
        if !self.is_loaded() {
            return self.state.menu.clone();
        }
        filter_menu(&self.state.menu, &self.state.permissions)
    }
}

fn filter_menu(items: &[MenuItem], granted: &PermissionSet) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| item.permission.as_deref().is_none_or(|p| granted.contains(p)))
        .filter_map(|item| {
            let children = filter_menu(&item.children, granted);
            if item.route.is_none() && children.is_empty() {
                return None;
            }
            Some(MenuItem {
                children,
                ..item.clone()
            })
        })
        .collect()
}

impl core::fmt::Debug for SidebarStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SidebarStore")
            .field("menu_items", &self.state.menu.len())
            .field("permissions", &self.state.permissions.len())
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn leaf(label: &str, route: &str, permission: Option<&str>) -> MenuItem {
        MenuItem {
            label: label.to_string(),
            route: Some(route.to_string()),
            permission: permission.map(str::to_string),
            children: Vec::new(),
        }
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            leaf("Dashboard", "/dashboard", None),
            MenuItem {
                label: "Staff".to_string(),
                route: None,
                permission: None,
                children: vec![
                    leaf("Employees", "/employees", Some("employees.view")),
                    leaf("Roles", "/roles", Some("roles.view")),
                ],
            },
            MenuItem {
                label: "Marketing".to_string(),
                route: None,
                permission: None,
                children: vec![leaf("Banners", "/banners", Some("banners.view"))],
            },
        ]
    }

    #[test]
    fn persists_and_reloads() {
        let storage = MemoryStorage::shared();
        let mut store = SidebarStore::new(storage.clone());
        store
            .set_sidebar(menu(), ["employees.view"].into_iter().collect())
            .unwrap();

        let mut reloaded = SidebarStore::new(storage);
        assert!(!reloaded.is_loaded());
        reloaded.hydrate();
        assert!(reloaded.is_loaded());
        assert!(reloaded.permissions().contains("employees.view"));
        assert_eq!(reloaded.menu().len(), 3);
    }

    #[test]
    fn visible_menu_prunes_ungranted_entries_and_empty_groups() {
        let mut store = SidebarStore::new(MemoryStorage::shared());
        store
            .set_sidebar(menu(), ["employees.view"].into_iter().collect())
            .unwrap();

        let visible = store.visible_menu();
        let labels: Vec<&str> = visible.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Dashboard", "Staff"]);
        assert_eq!(visible[1].children.len(), 1);
        assert_eq!(visible[1].children[0].label, "Employees");
    }

    #[test]
    fn clear_empties_permissions() {
        let storage = MemoryStorage::shared();
        let mut store = SidebarStore::new(storage.clone());
        store
            .set_sidebar(menu(), ["roles.view"].into_iter().collect())
            .unwrap();
        store.clear().unwrap();
        assert!(store.permissions().is_empty());
        assert_eq!(storage.get(SIDEBAR_STORAGE_KEY).unwrap(), None);
    }
}
