//! Tenant organization records: companies, roles/departments, and users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{FieldSpec, FieldValue, Rule, Validatable};

/// A tenant company. The root of every other record's ownership chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Company {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl Validatable for Company {
    const NAME: &'static str = "Company";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<Company>] = &[
            FieldSpec {
                name: "Name",
                get: |c| FieldValue::str(&c.name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
            FieldSpec {
                name: "Address",
                get: |c| FieldValue::str(&c.address),
                rules: &[Rule::MaxLen(500)],
            },
            FieldSpec {
                name: "Email",
                get: |c| FieldValue::str(&c.email),
                rules: &[Rule::Required, Rule::MaxLen(255), Rule::Email],
            },
            FieldSpec {
                name: "Phone",
                get: |c| FieldValue::str(&c.phone),
                rules: &[Rule::Required, Rule::MaxLen(255), Rule::Phone],
            },
        ];
        SPECS
    }
}

/// A role or department within a company. Roles form a tree via
/// `ParentRoleID`; departments are roles with `IsDepartment` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Role {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "CompanyID")]
    pub company_id: u64,
    #[serde(rename = "ParentRoleID")]
    pub parent_role_id: Option<u64>,
    pub role_or_department_name: String,
    pub is_department: bool,
}

impl Validatable for Role {
    const NAME: &'static str = "Role";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<Role>] = &[
            FieldSpec {
                name: "CompanyID",
                get: |r| FieldValue::UInt(r.company_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "RoleOrDepartmentName",
                get: |r| FieldValue::str(&r.role_or_department_name),
                rules: &[Rule::Required, Rule::MaxLen(255)],
            },
        ];
        SPECS
    }
}

/// A user account belonging to a company, holding one role.
///
/// `PasswordHash` carries a pre-hashed credential (SHA-256 hex); this
/// service never sees plaintext passwords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "CompanyID")]
    pub company_id: u64,
    #[serde(rename = "RoleID")]
    pub role_id: u64,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Validatable for User {
    const NAME: &'static str = "User";

    fn field_specs() -> &'static [FieldSpec<Self>] {
        const SPECS: &[FieldSpec<User>] = &[
            FieldSpec {
                name: "CompanyID",
                get: |u| FieldValue::UInt(u.company_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "RoleID",
                get: |u| FieldValue::UInt(u.role_id),
                rules: &[Rule::Required],
            },
            FieldSpec {
                name: "Username",
                get: |u| FieldValue::str(&u.username),
                rules: &[Rule::Required, Rule::MaxLen(50)],
            },
            FieldSpec {
                name: "PasswordHash",
                get: |u| FieldValue::str(&u.password_hash),
                rules: &[Rule::Required, Rule::MaxLen(255), Rule::Sha256],
            },
            FieldSpec {
                name: "Email",
                get: |u| FieldValue::str(&u.email),
                rules: &[Rule::Required, Rule::MaxLen(255), Rule::Email],
            },
            FieldSpec {
                name: "FirstName",
                get: |u| FieldValue::str(&u.first_name),
                rules: &[Rule::MaxLen(50)],
            },
            FieldSpec {
                name: "LastName",
                get: |u| FieldValue::str(&u.last_name),
                rules: &[Rule::MaxLen(50)],
            },
            FieldSpec {
                name: "Phone",
                get: |u| FieldValue::str(&u.phone),
                rules: &[Rule::MaxLen(50), Rule::Phone],
            },
        ];
        SPECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate, validate_except};

    fn valid_company() -> Company {
        Company {
            name: "Acme Industrial".into(),
            address: "1 Factory Way".into(),
            email: "ops@acme.example".into(),
            phone: "+14155550132".into(),
            ..Company::default()
        }
    }

    #[test]
    fn company_wire_names_are_legacy_compatible() {
        let value = serde_json::to_value(valid_company()).unwrap();
        for key in ["ID", "CreatedAt", "UpdatedAt", "Name", "Address", "Email", "Phone"] {
            assert!(value.get(key).is_some(), "missing wire key {key}");
        }
    }

    #[test]
    fn company_decodes_from_partial_payload() {
        let company: Company =
            serde_json::from_str(r#"{"Name":"Acme","Email":"a@b.co"}"#).unwrap();
        assert_eq!(company.name, "Acme");
        assert_eq!(company.id, 0);
        assert!(company.phone.is_empty());
    }

    #[test]
    fn valid_company_passes_validation() {
        assert!(validate(&valid_company()).is_ok());
    }

    #[test]
    fn company_missing_email_fails_with_required() {
        let mut company = valid_company();
        company.email.clear();
        let err = validate(&company).unwrap_err();
        assert_eq!(err.field, "Email");
        assert_eq!(err.tag, "required");
    }

    #[test]
    fn company_bad_phone_fails_with_e164() {
        let mut company = valid_company();
        company.phone = "555-0132".into();
        let err = validate(&company).unwrap_err();
        assert_eq!(err.field, "Phone");
        assert_eq!(err.tag, "e164");
    }

    #[test]
    fn role_requires_owning_company() {
        let role = Role {
            role_or_department_name: "Maintenance".into(),
            ..Role::default()
        };
        let err = validate(&role).unwrap_err();
        assert_eq!(err.field, "CompanyID");
    }

    #[test]
    fn role_parent_is_optional() {
        let role = Role {
            company_id: 1,
            role_or_department_name: "Maintenance".into(),
            ..Role::default()
        };
        assert!(role.parent_role_id.is_none());
        assert!(validate(&role).is_ok());
    }

    #[test]
    fn user_password_hash_must_be_sha256_hex() {
        let user = User {
            company_id: 1,
            role_id: 1,
            username: "jsmith".into(),
            password_hash: "hunter2".into(),
            email: "j@smith.example".into(),
            ..User::default()
        };
        let err = validate(&user).unwrap_err();
        assert_eq!(err.field, "PasswordHash");
        assert_eq!(err.tag, "sha256");

        let user = User {
            password_hash: "e".repeat(64),
            ..user
        };
        assert!(validate(&user).is_ok());
    }

    #[test]
    fn server_assigned_fields_are_skippable() {
        // Partial-update flows validate with the server-assigned fields
        // excluded; business fields are still checked.
        let mut company = valid_company();
        company.name.clear();
        assert!(validate_except(&company, &["ID", "CreatedAt", "UpdatedAt"]).is_err());
    }
}
