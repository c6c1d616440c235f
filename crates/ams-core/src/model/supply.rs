//! Supply-chain records: inventory, purchase orders, suppliers, external
//! service providers, and user notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{FieldSpec, FieldValue, Rule, Validatable};

/// The notification subjects clients may reference via `RelatedID`.
const NOTIFICATION_RELATED_TYPES: &[&str] = &[
    "inventory",
    "equipments",
    "schedule",
    "role",
    "providers",
    "parts_usage",
    "documents",
];

/// Notification read-state values.
const NOTIFICATION_STATUSES: &[&str] = &["Unread", "Read", "Dismissed"];

/// A stocked inventory item (spare parts, consumables).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Inventory {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "CompanyID")]
    pub company_id: u64,
    pub name: String,
    pub current_stock: u64,
    pub min_required_quantity: u64,
    pub last_order_date: Option<DateTime<Utc>>,
    pub tags: String,
    pub location: String,
}

impl Validatable for Inventory {
    const NAME: &'static str = "Inventory";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<Inventory>] = &[
            FieldSpec {
                name: "CompanyID",
                get: |i| FieldValue::UInt(i.company_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "Name",
                get: |i| FieldValue::str(&i.name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "LastOrderDate",
                get: |i| FieldValue::time(&i.last_order_date),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "Tags",
                get: |i| FieldValue::str(&i.tags),
                rules: &[Rule::MaxLen(500)],
            },
            FieldSpec {
                name: "Location",
                get: |i| FieldValue::str(&i.location),
                rules: &[Rule::MaxLen(255)],
            },
        ];
        SPECS
    }
}

/// A purchase order restocking an inventory item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PurchaseOrder {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "InventoryID")]
    pub inventory_id: u64,
    #[serde(rename = "SupplierID")]
    pub supplier_id: u64,
    #[serde(rename = "CompanyID")]
    pub company_id: u64,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    pub quantity_ordered: u64,
    pub order_date: Option<DateTime<Utc>>,
    pub received_date: Option<DateTime<Utc>>,
}

impl Validatable for PurchaseOrder {
    const NAME: &'static str = "PurchaseOrder";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<PurchaseOrder>] = &[
            FieldSpec {
                name: "InventoryID",
                get: |p| FieldValue::UInt(p.inventory_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "CompanyID",
                get: |p| FieldValue::UInt(p.company_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "UserID",
                get: |p| FieldValue::UInt(p.user_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "QuantityOrdered",
                get: |p| FieldValue::UInt(p.quantity_ordered),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "OrderDate",
                get: |p| FieldValue::time(&p.order_date),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "ReceivedDate",
                get: |p| FieldValue::time(&p.received_date),
                rules: &[Rule::Required],
            },
        ];
        SPECS
    }
}

/// A parts supplier. `Tags` carries an embedded JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Supplier {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub supplier_name: String,
    pub contact_details: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    #[serde(rename = "IBAN")]
    pub iban: String,
    pub tags: Option<String>,
}

impl Validatable for Supplier {
    const NAME: &'static str = "Supplier";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<Supplier>] = &[
            FieldSpec {
                name: "SupplierName",
                get: |s| FieldValue::str(&s.supplier_name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "ContactDetails",
                get: |s| FieldValue::str(&s.contact_details),
                rules: &[Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "Phone",
                get: |s| FieldValue::str(&s.phone),
                rules: &[Rule::MaxLen(255), Rule::Phone],
            },
            FieldSpec {
                name: "Address",
                get: |s| FieldValue::str(&s.address),
                rules: &[Rule::MaxLen(500)],
            },
            FieldSpec {
                name: "Email",
                get: |s| FieldValue::str(&s.email),
                rules: &[Rule::MaxLen(255), Rule::Email],
            },
            FieldSpec {
                name: "IBAN",
                get: |s| FieldValue::str(&s.iban),
                rules: &[Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "Tags",
                get: |s| FieldValue::opt_str(&s.tags),
                rules: &[Rule::Json],
            },
        ];
        SPECS
    }
}

/// An external maintenance service provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServiceProvider {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    pub contact: String,
    /// Aggregate rating on a 0–5 scale.
    pub rating: f64,
    pub reviews_count: u64,
    pub specialization: Option<String>,
    pub tags: String,
    pub address: String,
    pub email: String,
}

impl Validatable for ServiceProvider {
    const NAME: &'static str = "ServiceProvider";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<ServiceProvider>] = &[
            FieldSpec {
                name: "Name",
                get: |p| FieldValue::str(&p.name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "Contact",
                get: |p| FieldValue::str(&p.contact),
                rules: &[Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "Rating",
                get: |p| FieldValue::Float(p.rating),
                rules: &[Rule::Max(5.0)],
            },
            FieldSpec {
                name: "Specialization",
                get: |p| FieldValue::opt_str(&p.specialization),
                rules: &[Rule::MaxLen(500)],
            },
            FieldSpec {
                name: "Tags",
                get: |p| FieldValue::str(&p.tags),
                rules: &[Rule::Json],
            },
            FieldSpec {
                name: "Address",
                get: |p| FieldValue::str(&p.address),
                rules: &[Rule::MaxLen(500)],
            },
            FieldSpec {
                name: "Email",
                get: |p| FieldValue::str(&p.email),
                rules: &[Rule::MaxLen(255), Rule::Email],
            },
        ];
        SPECS
    }
}

/// A notification addressed to a user, optionally referencing another
/// record via `RelatedType`/`RelatedID`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Notification {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    #[serde(rename = "RelatedID")]
    pub related_id: u64,
    pub related_type: String,
    pub notification_type: String,
    pub message: Option<String>,
    pub status: String,
}

impl Validatable for Notification {
    const NAME: &'static str = "Notification";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<Notification>] = &[
            FieldSpec {
                name: "UserID",
                get: |n| FieldValue::UInt(n.user_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "RelatedType",
                get: |n| FieldValue::str(&n.related_type),
                rules: &[Rule::Required, Rule::OneOf(NOTIFICATION_RELATED_TYPES)],
            },
            FieldSpec {
                name: "NotificationType",
                get: |n| FieldValue::str(&n.notification_type),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "Message",
                get: |n| FieldValue::opt_str(&n.message),
                rules: &[Rule::Required, Rule::MaxLen(65535)],
            },
            FieldSpec {
                name: "Status",
                get: |n| FieldValue::str(&n.status),
                rules: &[Rule::OneOf(NOTIFICATION_STATUSES)],
            },
        ];
        SPECS
    }
}
