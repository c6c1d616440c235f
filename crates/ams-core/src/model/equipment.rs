//! Equipment records: categories, the equipment register, and the two
//! document attachments (operational docs and compliance certificates).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{FieldSpec, FieldValue, Rule, Validatable};

/// An equipment category. Categories nest via `ParentCategoryID`;
/// `IsMainCategory` marks top-level entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EquipmentCategory {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "CompanyID")]
    pub company_id: u64,
    #[serde(rename = "ParentCategoryID")]
    pub parent_category_id: u64,
    pub category_name: String,
    pub is_main_category: bool,
}

impl Validatable for EquipmentCategory {
    const NAME: &'static str = "EquipmentCategory";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<EquipmentCategory>] = &[
            FieldSpec {
                name: "CompanyID",
                get: |c| FieldValue::UInt(c.company_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "CategoryName",
                get: |c| FieldValue::str(&c.category_name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
        ];
        SPECS
    }
}

/// A registered piece of equipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Equipment {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "CompanyID")]
    pub company_id: u64,
    #[serde(rename = "EquipmentCategoryID")]
    pub equipment_category_id: u64,
    pub name: String,
    pub purchase_date: Option<DateTime<Utc>>,
    pub warranty_expiry: Option<DateTime<Utc>>,
    pub last_maintenance_date: Option<DateTime<Utc>>,
    #[serde(rename = "ImageURL")]
    pub image_url: String,
    pub additional_notes: String,
}

impl Validatable for Equipment {
    const NAME: &'static str = "Equipment";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<Equipment>] = &[
            FieldSpec {
                name: "CompanyID",
                get: |e| FieldValue::UInt(e.company_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "EquipmentCategoryID",
                get: |e| FieldValue::UInt(e.equipment_category_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "Name",
                get: |e| FieldValue::str(&e.name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "PurchaseDate",
                get: |e| FieldValue::time(&e.purchase_date),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "WarrantyExpiry",
                get: |e| FieldValue::time(&e.warranty_expiry),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "LastMaintenanceDate",
                get: |e| FieldValue::time(&e.last_maintenance_date),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "ImageURL",
                get: |e| FieldValue::str(&e.image_url),
                rules: &[Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "AdditionalNotes",
                get: |e| FieldValue::str(&e.additional_notes),
                rules: &[Rule::MaxLen(500)],
            },
        ];
        SPECS
    }
}

/// An operational document attached to a piece of equipment (manuals,
/// service sheets).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EquipmentDoc {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "EquipmentID")]
    pub equipment_id: u64,
    pub doc_name: String,
    #[serde(rename = "DocURL")]
    pub doc_url: String,
    pub upload_date: Option<DateTime<Utc>>,
}

impl Validatable for EquipmentDoc {
    const NAME: &'static str = "EquipmentDoc";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<EquipmentDoc>] = &[
            FieldSpec {
                name: "EquipmentID",
                get: |d| FieldValue::UInt(d.equipment_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "DocName",
                get: |d| FieldValue::str(&d.doc_name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "DocURL",
                get: |d| FieldValue::str(&d.doc_url),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "UploadDate",
                get: |d| FieldValue::time(&d.upload_date),
                rules: &[Rule::Required],
            },
        ];
        SPECS
    }
}

/// A compliance certificate with an expiry date, attached to equipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ComplianceDocument {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "EquipmentID")]
    pub equipment_id: u64,
    pub document_name: String,
    #[serde(rename = "DocumentURL")]
    pub document_url: String,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl Validatable for ComplianceDocument {
    const NAME: &'static str = "ComplianceDocument";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<ComplianceDocument>] = &[
            FieldSpec {
                name: "EquipmentID",
                get: |d| FieldValue::UInt(d.equipment_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "DocumentName",
                get: |d| FieldValue::str(&d.document_name),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "ExpiryDate",
                get: |d| FieldValue::time(&d.expiry_date),
                rules: &[Rule::Required],
            },
        ];
        SPECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use chrono::TimeZone;

    fn day(d: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2025, 6, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn equipment_requires_dates() {
        let equipment = Equipment {
            company_id: 1,
            equipment_category_id: 2,
            name: "Hydraulic press".into(),
            ..Equipment::default()
        };
        let err = validate(&equipment).unwrap_err();
        assert_eq!(err.field, "PurchaseDate");
        assert_eq!(err.kind, "time");
    }

    #[test]
    fn fully_populated_equipment_passes() {
        let equipment = Equipment {
            company_id: 1,
            equipment_category_id: 2,
            name: "Hydraulic press".into(),
            purchase_date: day(1),
            warranty_expiry: day(2),
            last_maintenance_date: day(3),
            ..Equipment::default()
        };
        assert!(validate(&equipment).is_ok());
    }

    #[test]
    fn acronym_wire_names_survive_round_trip() {
        let doc = EquipmentDoc {
            equipment_id: 4,
            doc_name: "Manual".into(),
            doc_url: "https://docs.example/manual.pdf".into(),
            upload_date: day(1),
            ..EquipmentDoc::default()
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("DocURL").is_some());
        assert!(value.get("EquipmentID").is_some());

        let back: EquipmentDoc = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn compliance_document_url_is_unrestricted() {
        let doc = ComplianceDocument {
            equipment_id: 4,
            document_name: "Pressure vessel cert".into(),
            document_url: String::new(),
            expiry_date: day(30),
            ..ComplianceDocument::default()
        };
        assert!(validate(&doc).is_ok());
    }

    #[test]
    fn category_main_flag_defaults_false() {
        let category: EquipmentCategory = serde_json::from_str(
            r#"{"CompanyID":1,"CategoryName":"Presses"}"#,
        )
        .unwrap();
        assert!(!category.is_main_category);
        assert!(validate(&category).is_ok());
    }
}
