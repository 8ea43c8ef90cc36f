//! One wrapper per backend call, grouped by console section.

pub mod access;
pub mod auth;
pub mod customers;
pub mod delivery;
pub mod marketing;
pub mod orders;
pub mod staff;

use crate::Resource;

pub const EMPLOYEES: Resource = Resource::new("employee", "employee", "employees");
pub const CUSTOMERS: Resource = Resource::new("customer", "customer", "customers");
pub const CONTACTS: Resource = Resource::new("contact", "contact", "contacts");
pub const BANNERS: Resource = Resource::new("banner", "banner", "banners");
pub const COUPONS: Resource = Resource::new("coupon", "coupon", "coupons");
pub const OFFERS: Resource = Resource::new("offer", "offer", "offers");
pub const MEMBERSHIP_TIERS: Resource =
    Resource::new("membership", "membership-tier", "membership-tiers");
pub const ORDERS: Resource = Resource::new("order", "order", "orders");
pub const FEEDBACK: Resource = Resource::new("feedback", "feedback", "feedbacks");
pub const ROLES: Resource = Resource::new("role", "role", "roles");
pub const PERMISSIONS: Resource = Resource::new("permission", "permission", "permissions");
pub const DELIVERY_SLOTS: Resource = Resource::new("delivery", "delivery-slot", "delivery-slots");
pub const DELIVERY_ASSIGNMENTS: Resource =
    Resource::new("delivery", "delivery-assignment", "delivery-assignments");
pub const DOCUMENT_TYPES: Resource = Resource::new("document", "document-type", "document-types");
