//! # Entity Records
//!
//! The resource records managed by the service, one per storage table.
//! Every record carries the store-assigned `ID`/`CreatedAt`/`UpdatedAt`
//! fields; domain relations are expressed as foreign-key identifiers
//! (`CompanyID`, `EquipmentID`, …), never as embedded records.
//!
//! Wire field names are PascalCase with acronyms preserved (`ID`,
//! `DocumentURL`, `IBAN`) so payloads written for the legacy service decode
//! unchanged. All records tolerate partial payloads via `#[serde(default)]`.

mod equipment;
mod maintenance;
mod organization;
mod supply;

pub use equipment::{ComplianceDocument, Equipment, EquipmentCategory, EquipmentDoc};
pub use maintenance::{
    MaintenanceHistory, MaintenancePartsUsage, MaintenanceSchedule, MaintenanceType,
};
pub use organization::{Company, Role, User};
pub use supply::{Inventory, Notification, PurchaseOrder, ServiceProvider, Supplier};
