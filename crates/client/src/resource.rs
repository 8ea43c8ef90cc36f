//! CRUD path conventions shared by most backend resources.

use serde::Serialize;
use serde::de::DeserializeOwned;

use backoffice_core::RecordId;

use crate::{ApiClient, ApiResult};

/// A CRUD resource under `/v1/<scope>`.
///
/// Paths: `get-all-<plural>`, `get-<name>/{id}`, `create-<name>`,
/// `update-<name>/{id}`, `delete-<name>/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub scope: &'static str,
    pub name: &'static str,
    pub plural: &'static str,
}

impl Resource {
    pub const fn new(scope: &'static str, name: &'static str, plural: &'static str) -> Self {
        Self {
            scope,
            name,
            plural,
        }
    }

    pub fn list_path(&self) -> String {
        format!("/v1/{}/get-all-{}", self.scope, self.plural)
    }

    pub fn get_path(&self, id: &RecordId) -> String {
        format!("/v1/{}/get-{}/{}", self.scope, self.name, id)
    }

    pub fn create_path(&self) -> String {
        format!("/v1/{}/create-{}", self.scope, self.name)
    }

    pub fn update_path(&self, id: &RecordId) -> String {
        format!("/v1/{}/update-{}/{}", self.scope, self.name, id)
    }

    pub fn delete_path(&self, id: &RecordId) -> String {
        format!("/v1/{}/delete-{}/{}", self.scope, self.name, id)
    }
}

impl ApiClient {
    pub async fn list<T: DeserializeOwned>(&self, resource: &Resource) -> ApiResult<Vec<T>> {
        self.get(&resource.list_path()).await
    }

    pub async fn fetch<T: DeserializeOwned>(&self, resource: &Resource, id: &RecordId) -> ApiResult<T> {
        self.get(&resource.get_path(id)).await
    }

    pub async fn create<B, T>(&self, resource: &Resource, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post(&resource.create_path(), body).await
    }

    pub async fn update<B, T>(&self, resource: &Resource, id: &RecordId, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.put(&resource.update_path(id), body).await
    }

    pub async fn remove(&self, resource: &Resource, id: &RecordId) -> ApiResult<()> {
        self.delete(&resource.delete_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_backend_conventions() {
        let r = Resource::new("employee", "employee", "employees");
        let id = RecordId::new("e1").unwrap();
        assert_eq!(r.list_path(), "/v1/employee/get-all-employees");
        assert_eq!(r.create_path(), "/v1/employee/create-employee");
        assert_eq!(r.update_path(&id), "/v1/employee/update-employee/e1");
        assert_eq!(r.delete_path(&id), "/v1/employee/delete-employee/e1");
        assert_eq!(r.get_path(&id), "/v1/employee/get-employee/e1");
    }
}
