//! Entity shapes exchanged with the backend.
//!
//! Field names follow the backend's camelCase JSON; ids arrive as `_id`.

pub mod access;
pub mod customers;
pub mod delivery;
pub mod marketing;
pub mod memberships;
pub mod orders;
pub mod staff;

pub use access::{MenuItem, PermissionEntry, Role};
pub use customers::{Contact, Customer};
pub use delivery::{AssignmentStatus, DeliveryAssignment, DeliverySlot, DocumentType};
pub use marketing::{Banner, Coupon, Discount, Offer};
pub use memberships::MembershipTier;
pub use orders::{Feedback, Order, OrderLine, OrderStatus};
pub use staff::{Employee, NewEmployee};

use crate::impl_record;

impl_record!(
    Role,
    PermissionEntry,
    Customer,
    Contact,
    DeliverySlot,
    DeliveryAssignment,
    DocumentType,
    Banner,
    Coupon,
    Offer,
    MembershipTier,
    Order,
    Feedback,
    Employee,
);
