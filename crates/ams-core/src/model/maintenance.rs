//! Maintenance records: type catalogue, schedules, performed-work history,
//! and parts consumed during maintenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{FieldSpec, FieldValue, Rule, Validatable};

/// A maintenance type (inspection, lubrication, overhaul, …).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceType {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub type_name: String,
    pub description: Option<String>,
}

impl Validatable for MaintenanceType {
    const NAME: &'static str = "MaintenanceType";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<MaintenanceType>] = &[
            FieldSpec {
                name: "TypeName",
                get: |t| FieldValue::str(&t.type_name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "Description",
                get: |t| FieldValue::opt_str(&t.description),
                rules: &[Rule::MaxLen(255)],
            },
        ];
        SPECS
    }
}

/// A scheduled maintenance slot for a piece of equipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceSchedule {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "EquipmentID")]
    pub equipment_id: u64,
    #[serde(rename = "MaintenanceTypeID")]
    pub maintenance_type_id: u64,
    pub reminder_sent: bool,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl Validatable for MaintenanceSchedule {
    const NAME: &'static str = "MaintenanceSchedule";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<MaintenanceSchedule>] = &[
            FieldSpec {
                name: "EquipmentID",
                get: |s| FieldValue::UInt(s.equipment_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "MaintenanceTypeID",
                get: |s| FieldValue::UInt(s.maintenance_type_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "ScheduledDate",
                get: |s| FieldValue::time(&s.scheduled_date),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "ScheduledTime",
                get: |s| FieldValue::time(&s.scheduled_time),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "Notes",
                get: |s| FieldValue::opt_str(&s.notes),
                rules: &[Rule::MaxLen(500)],
            },
        ];
        SPECS
    }
}

/// A completed maintenance event. The service provider and originating
/// schedule are optional — ad-hoc in-house work has neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceHistory {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "EquipmentID")]
    pub equipment_id: u64,
    #[serde(rename = "ServiceProviderID")]
    pub service_provider_id: u64,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    #[serde(rename = "MaintenanceScheduleID")]
    pub maintenance_schedule_id: u64,
    pub maintenance_date: Option<DateTime<Utc>>,
    pub maintenance_time: Option<DateTime<Utc>>,
    pub additional_notes: String,
}

impl Validatable for MaintenanceHistory {
    const NAME: &'static str = "MaintenanceHistory";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<MaintenanceHistory>] = &[
            FieldSpec {
                name: "EquipmentID",
                get: |h| FieldValue::UInt(h.equipment_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "UserID",
                get: |h| FieldValue::UInt(h.user_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "MaintenanceDate",
                get: |h| FieldValue::time(&h.maintenance_date),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "MaintenanceTime",
                get: |h| FieldValue::time(&h.maintenance_time),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "AdditionalNotes",
                get: |h| FieldValue::str(&h.additional_notes),
                rules: &[Rule::MaxLen(500)],
            },
        ];
        SPECS
    }
}

/// Inventory parts consumed by a maintenance event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenancePartsUsage {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "MaintenanceHistoryID")]
    pub maintenance_history_id: u64,
    #[serde(rename = "InventoryID")]
    pub inventory_id: u64,
    pub quantity_used: u64,
    pub notes: String,
}

impl Validatable for MaintenancePartsUsage {
    const NAME: &'static str = "MaintenancePartsUsage";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<MaintenancePartsUsage>] = &[
            FieldSpec {
                name: "MaintenanceHistoryID",
                get: |p| FieldValue::UInt(p.maintenance_history_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "InventoryID",
                get: |p| FieldValue::UInt(p.inventory_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "QuantityUsed",
                get: |p| FieldValue::UInt(p.quantity_used),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "Notes",
                get: |p| FieldValue::str(&p.notes),
                rules: &[Rule::MaxLen(500)],
            },
        ];
        SPECS
    }
}
