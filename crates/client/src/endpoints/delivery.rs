//! Delivery slots, assignments and partner document types.

use backoffice_core::RecordId;
use backoffice_core::models::{AssignmentStatus, DeliveryAssignment, DeliverySlot, DocumentType};

use super::{DELIVERY_ASSIGNMENTS, DELIVERY_SLOTS, DOCUMENT_TYPES};
use crate::{ApiClient, ApiResult};

pub async fn list_delivery_slots(client: &ApiClient) -> ApiResult<Vec<DeliverySlot>> {
    client.list(&DELIVERY_SLOTS).await
}

pub async fn create_delivery_slot(client: &ApiClient, slot: &DeliverySlot) -> ApiResult<DeliverySlot> {
    client.create(&DELIVERY_SLOTS, slot).await
}

pub async fn update_delivery_slot(client: &ApiClient, slot: &DeliverySlot) -> ApiResult<DeliverySlot> {
    client.update(&DELIVERY_SLOTS, &slot.id, slot).await
}

pub async fn delete_delivery_slot(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&DELIVERY_SLOTS, id).await
}

pub async fn list_delivery_assignments(client: &ApiClient) -> ApiResult<Vec<DeliveryAssignment>> {
    client.list(&DELIVERY_ASSIGNMENTS).await
}

/// `POST /v1/delivery/assign-order`
pub async fn assign_order(
    client: &ApiClient,
    order_id: &RecordId,
    delivery_partner_id: &RecordId,
    slot_id: Option<&RecordId>,
) -> ApiResult<DeliveryAssignment> {
    let body = serde_json::json!({
        "orderId": order_id,
        "deliveryPartnerId": delivery_partner_id,
        "slotId": slot_id,
    });
    client.post("/v1/delivery/assign-order", &body).await
}

/// `PATCH /v1/delivery/update-assignment-status/{id}`
pub async fn update_assignment_status(
    client: &ApiClient,
    id: &RecordId,
    status: AssignmentStatus,
) -> ApiResult<DeliveryAssignment> {
    let path = format!("/v1/delivery/update-assignment-status/{id}");
    client.patch(&path, &serde_json::json!({ "status": status })).await
}

pub async fn list_document_types(client: &ApiClient) -> ApiResult<Vec<DocumentType>> {
    client.list(&DOCUMENT_TYPES).await
}

pub async fn create_document_type(client: &ApiClient, doc: &DocumentType) -> ApiResult<DocumentType> {
    client.create(&DOCUMENT_TYPES, doc).await
}

pub async fn delete_document_type(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&DOCUMENT_TYPES, id).await
}
