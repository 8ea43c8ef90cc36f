//! Registry of the named list caches.

use backoffice_core::models::{
    Banner, Contact, Coupon, DeliveryAssignment, DeliverySlot, DocumentType, MembershipTier, Offer,
    PermissionEntry, Role,
};

use crate::ListStore;

/// One independent list per resource; no cross-store invariants.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub roles: ListStore<Role>,
    pub permissions: ListStore<PermissionEntry>,
    pub banners: ListStore<Banner>,
    pub coupons: ListStore<Coupon>,
    pub offers: ListStore<Offer>,
    pub membership_tiers: ListStore<MembershipTier>,
    pub delivery_slots: ListStore<DeliverySlot>,
    pub document_types: ListStore<DocumentType>,
    pub contacts: ListStore<Contact>,
    pub delivery_assignments: ListStore<DeliveryAssignment>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all store revisions; changes whenever any list changes.
    pub fn revision(&self) -> u64 {
        self.roles.revision()
            + self.permissions.revision()
            + self.banners.revision()
            + self.coupons.revision()
            + self.offers.revision()
            + self.membership_tiers.revision()
            + self.delivery_slots.revision()
            + self.document_types.revision()
            + self.contacts.revision()
            + self.delivery_assignments.revision()
    }

    /// Drop every cached list (used on logout).
    pub fn clear(&mut self) {
        self.roles.clear();
        self.permissions.clear();
        self.banners.clear();
        self.coupons.clear();
        self.offers.clear();
        self.membership_tiers.clear();
        self.delivery_slots.clear();
        self.document_types.clear();
        self.contacts.clear();
        self.delivery_assignments.clear();
    }
}
