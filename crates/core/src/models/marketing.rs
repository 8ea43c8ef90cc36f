use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::models::staff::default_true;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub position: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// How a coupon reduces an order total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Discount {
    Percentage(f64),
    Flat(f64),
}

impl Discount {
    /// Amount taken off `subtotal`, never more than the subtotal itself.
    pub fn amount_off(&self, subtotal: f64) -> f64 {
        let off = match self {
            Discount::Percentage(pct) => subtotal * pct.clamp(0.0, 100.0) / 100.0,
            Discount::Flat(amount) => amount.max(0.0),
        };
        off.min(subtotal.max(0.0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub code: String,
    pub discount: Discount,
    #[serde(default)]
    pub min_order_amount: Option<f64>,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Coupon {
    /// Whether the coupon is active and inside its validity window at `now`.
    pub fn is_redeemable_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.valid_from.is_none_or(|from| now >= from)
            && self.valid_until.is_none_or(|until| now < until)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "RecordId::is_unassigned"
    )]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discount_percent: f64,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn discount_never_exceeds_subtotal() {
        assert_eq!(Discount::Percentage(10.0).amount_off(200.0), 20.0);
        assert_eq!(Discount::Percentage(150.0).amount_off(80.0), 80.0);
        assert_eq!(Discount::Flat(50.0).amount_off(30.0), 30.0);
        assert_eq!(Discount::Flat(-5.0).amount_off(30.0), 0.0);
    }

    #[test]
    fn discount_wire_shape() {
        let json = serde_json::to_value(Discount::Flat(25.0)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "flat", "value": 25.0}));
    }

    #[test]
    fn coupon_window() {
        let now = Utc::now();
        let coupon = Coupon {
            id: RecordId::generate(),
            code: "SAVE10".to_string(),
            discount: Discount::Percentage(10.0),
            min_order_amount: None,
            max_uses: None,
            valid_from: Some(now - Duration::days(1)),
            valid_until: Some(now + Duration::days(1)),
            is_active: true,
        };
        assert!(coupon.is_redeemable_at(now));
        assert!(!coupon.is_redeemable_at(now + Duration::days(2)));

        let inactive = Coupon { is_active: false, ..coupon };
        assert!(!inactive.is_redeemable_at(now));
    }
}
