//! Generic in-memory list cache.

use thiserror::Error;

use backoffice_core::{Record, RecordId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id '{0}'")]
    NotFound(RecordId),
}

/// Ordered list of records with add/update/remove reducers.
///
/// Mutation is synchronous and last-writer-wins. Every successful mutation
/// bumps [`ListStore::revision`] so observers can tell the list changed.
#[derive(Debug, Clone)]
pub struct ListStore<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }
}

impl<T: Record> ListStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the whole list with what the server returned.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.touch();
    }

    /// Append `item` under a freshly generated local id and return that id.
    pub fn add_item(&mut self, mut item: T) -> RecordId {
        let id = RecordId::generate();
        item.set_id(id.clone());
        self.items.push(item);
        self.touch();
        id
    }

    /// Insert a server-returned record, replacing any record with the same id.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        self.touch();
    }

    /// Apply `patch` to the record with `id`. The id itself cannot be patched.
    pub fn update_item<F>(&mut self, id: &RecordId, patch: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut T),
    {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        patch(item);
        item.set_id(id.clone());
        self.touch();
        Ok(())
    }

    pub fn remove_item(&mut self, id: &RecordId) -> Result<T, StoreError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let removed = self.items.remove(pos);
        self.touch();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
