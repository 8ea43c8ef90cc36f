use backoffice_core::models::{Feedback, Order, OrderStatus};
use backoffice_core::{CoreError, RecordId};

use super::{FEEDBACK, ORDERS};
use crate::{ApiClient, ApiResult};

pub async fn list_orders(client: &ApiClient) -> ApiResult<Vec<Order>> {
    client.list(&ORDERS).await
}

pub async fn get_order(client: &ApiClient, id: &RecordId) -> ApiResult<Order> {
    client.fetch(&ORDERS, id).await
}

/// `PATCH /v1/order/update-order-status/{id}`
pub async fn update_order_status(
    client: &ApiClient,
    id: &RecordId,
    status: OrderStatus,
) -> ApiResult<Order> {
    let path = format!("/v1/order/update-order-status/{id}");
    client.patch(&path, &serde_json::json!({ "status": status })).await
}

pub async fn list_feedback(client: &ApiClient) -> ApiResult<Vec<Feedback>> {
    client.list(&FEEDBACK).await
}

/// `POST /v1/feedback/reply-feedback/{id}`
pub async fn reply_to_feedback(
    client: &ApiClient,
    id: &RecordId,
    reply: &str,
) -> ApiResult<Feedback> {
    if reply.trim().is_empty() {
        return Err(CoreError::validation("reply must not be empty").into());
    }
    let path = format!("/v1/feedback/reply-feedback/{id}");
    client.post(&path, &serde_json::json!({ "reply": reply })).await
}
