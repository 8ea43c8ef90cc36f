use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Packed,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Packed => "packed",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Delivered and cancelled orders take no further status updates.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub order_number: String,
    pub customer_id: RecordId,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub placed_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn line_total(&self) -> f64 {
        self.items
            .iter()
            .map(|l| l.unit_price * f64::from(l.quantity))
            .sum()
    }
}

/// Customer feedback left on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub customer_id: RecordId,
    #[serde(default)]
    pub order_id: Option<RecordId>,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        let s = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(s, "\"out_for_delivery\"");
        assert_eq!(OrderStatus::OutForDelivery.to_string(), "out_for_delivery");
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Packed.is_terminal());
    }

    #[test]
    fn line_total_sums_lines() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "_id": "o-1",
            "orderNumber": "ORD-1001",
            "customerId": "c-9",
            "items": [
                {"productName": "Milk", "quantity": 2, "unitPrice": 1.5},
                {"productName": "Bread", "quantity": 1, "unitPrice": 2.0}
            ],
            "totalAmount": 5.0,
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(order.line_total(), 5.0);
    }
}
