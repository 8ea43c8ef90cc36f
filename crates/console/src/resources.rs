//! Resources the console can list, with the permission each one needs.

use serde::Serialize;

use crate::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Employees,
    Customers,
    Orders,
    Feedback,
    Roles,
    Permissions,
    Banners,
    Coupons,
    Offers,
    Memberships,
    DeliverySlots,
    DeliveryAssignments,
    DocumentTypes,
    Contacts,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 14] = [
        ResourceKind::Employees,
        ResourceKind::Customers,
        ResourceKind::Orders,
        ResourceKind::Feedback,
        ResourceKind::Roles,
        ResourceKind::Permissions,
        ResourceKind::Banners,
        ResourceKind::Coupons,
        ResourceKind::Offers,
        ResourceKind::Memberships,
        ResourceKind::DeliverySlots,
        ResourceKind::DeliveryAssignments,
        ResourceKind::DocumentTypes,
        ResourceKind::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Employees => "employees",
            ResourceKind::Customers => "customers",
            ResourceKind::Orders => "orders",
            ResourceKind::Feedback => "feedback",
            ResourceKind::Roles => "roles",
            ResourceKind::Permissions => "permissions",
            ResourceKind::Banners => "banners",
            ResourceKind::Coupons => "coupons",
            ResourceKind::Offers => "offers",
            ResourceKind::Memberships => "memberships",
            ResourceKind::DeliverySlots => "delivery-slots",
            ResourceKind::DeliveryAssignments => "delivery-assignments",
            ResourceKind::DocumentTypes => "document-types",
            ResourceKind::Contacts => "contacts",
        }
    }

    /// Permission required to read the list.
    pub fn view_permission(&self) -> &'static str {
        match self {
            ResourceKind::Employees => "employees.view",
            ResourceKind::Customers => "customers.view",
            ResourceKind::Orders => "orders.view",
            ResourceKind::Feedback => "feedback.view",
            ResourceKind::Roles => "roles.view",
            ResourceKind::Permissions => "permissions.view",
            ResourceKind::Banners => "banners.view",
            ResourceKind::Coupons => "coupons.view",
            ResourceKind::Offers => "offers.view",
            ResourceKind::Memberships => "memberships.view",
            ResourceKind::DeliverySlots | ResourceKind::DeliveryAssignments => "delivery.view",
            ResourceKind::DocumentTypes => "documents.view",
            ResourceKind::Contacts => "contacts.view",
        }
    }
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ResourceKind {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ResourceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| ConsoleError::UnknownResource(s.to_string()))
    }
}
