use backoffice_core::RecordId;
use backoffice_core::models::{Contact, Customer};

use super::{CONTACTS, CUSTOMERS};
use crate::{ApiClient, ApiResult};

pub async fn list_customers(client: &ApiClient) -> ApiResult<Vec<Customer>> {
    client.list(&CUSTOMERS).await
}

pub async fn get_customer(client: &ApiClient, id: &RecordId) -> ApiResult<Customer> {
    client.fetch(&CUSTOMERS, id).await
}

/// `PATCH /v1/customer/update-customer-status/{id}`
pub async fn set_customer_blocked(
    client: &ApiClient,
    id: &RecordId,
    blocked: bool,
) -> ApiResult<Customer> {
    let path = format!("/v1/customer/update-customer-status/{id}");
    client
        .patch(&path, &serde_json::json!({ "isBlocked": blocked }))
        .await
}

pub async fn list_contacts(client: &ApiClient) -> ApiResult<Vec<Contact>> {
    client.list(&CONTACTS).await
}

/// `PATCH /v1/contact/resolve-contact/{id}`
pub async fn resolve_contact(client: &ApiClient, id: &RecordId) -> ApiResult<Contact> {
    let path = format!("/v1/contact/resolve-contact/{id}");
    client.patch(&path, &serde_json::json!({ "resolved": true })).await
}

pub async fn delete_contact(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&CONTACTS, id).await
}
