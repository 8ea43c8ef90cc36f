//! Login, logout and the post-login sidebar fetch.

use serde::{Deserialize, Serialize};

use backoffice_auth::Identity;
use backoffice_core::models::MenuItem;

use crate::{ApiClient, ApiResult};

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    #[serde(alias = "employee")]
    pub user: Identity,
}

/// Menu plus the flat list of granted permission identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SidebarPayload {
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// `POST /v1/auth/login`
pub async fn login(client: &ApiClient, credentials: &Credentials) -> ApiResult<LoginPayload> {
    client.post("/v1/auth/login", credentials).await
}

/// `POST /v1/auth/logout`
pub async fn logout(client: &ApiClient) -> ApiResult<()> {
    client.post("/v1/auth/logout", &serde_json::json!({})).await
}

/// `GET /v1/sidebar/get-sidebar`
pub async fn sidebar(client: &ApiClient) -> ApiResult<SidebarPayload> {
    client.get("/v1/sidebar/get-sidebar").await
}
