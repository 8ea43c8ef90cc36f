//! Roles and the permission catalogue.

use backoffice_core::RecordId;
use backoffice_core::models::{PermissionEntry, Role};

use super::{PERMISSIONS, ROLES};
use crate::{ApiClient, ApiResult};

pub async fn list_roles(client: &ApiClient) -> ApiResult<Vec<Role>> {
    client.list(&ROLES).await
}

pub async fn create_role(client: &ApiClient, role: &Role) -> ApiResult<Role> {
    client.create(&ROLES, role).await
}

pub async fn update_role(client: &ApiClient, role: &Role) -> ApiResult<Role> {
    client.update(&ROLES, &role.id, role).await
}

pub async fn delete_role(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&ROLES, id).await
}

pub async fn list_permissions(client: &ApiClient) -> ApiResult<Vec<PermissionEntry>> {
    client.list(&PERMISSIONS).await
}
