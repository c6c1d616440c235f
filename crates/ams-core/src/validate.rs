//! # Field Validator
//!
//! Declarative field-level validation. Each entity declares an ordered list
//! of [`FieldSpec`]s — an accessor plus the rules that bind the field — and
//! [`validate`] walks that list, reporting the **first** violation as a
//! normalized [`ValidationError`].
//!
//! The rule set mirrors the constraints the legacy service enforced:
//! required-ness, length and numeric ceilings, and format checks (email,
//! E.164 phone numbers, SHA-256 digests, embedded JSON, enumerated values).

use crate::error::ValidationError;

/// A field value lifted out of an entity for rule evaluation.
///
/// The accessor copies the value out; entities are small records and
/// validation runs once per request.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A string field.
    Str(String),
    /// An optional string field (`NULL`-able column).
    OptStr(Option<String>),
    /// An unsigned integer field (identifiers, quantities).
    UInt(u64),
    /// An optional unsigned integer field (`NULL`-able foreign key).
    OptUInt(Option<u64>),
    /// A floating-point field.
    Float(f64),
    /// A boolean field.
    Bool(bool),
    /// A timestamp field; `None` means unset.
    Time(Option<chrono::DateTime<chrono::Utc>>),
}

impl FieldValue {
    /// Lift a string field.
    pub fn str(s: &str) -> Self {
        Self::Str(s.to_string())
    }

    /// Lift an optional string field.
    pub fn opt_str(s: &Option<String>) -> Self {
        Self::OptStr(s.clone())
    }

    /// Lift a timestamp field.
    pub fn time(t: &Option<chrono::DateTime<chrono::Utc>>) -> Self {
        Self::Time(*t)
    }

    /// The value's kind name as it appears in validation reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) | Self::OptStr(_) => "string",
            Self::UInt(_) | Self::OptUInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Time(_) => "time",
        }
    }

    /// Render the value for a validation report. Unset optionals render
    /// as the empty string.
    fn display(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::OptStr(s) => s.clone().unwrap_or_default(),
            Self::UInt(n) => n.to_string(),
            Self::OptUInt(n) => n.map(|n| n.to_string()).unwrap_or_default(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Time(t) => t.map(|t| t.to_rfc3339()).unwrap_or_default(),
        }
    }

    /// The string content of a string-like value, if any and non-empty.
    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Str(s) => (!s.is_empty()).then_some(s.as_str()),
            Self::OptStr(Some(s)) => (!s.is_empty()).then_some(s.as_str()),
            _ => None,
        }
    }
}

/// A single declared constraint on an entity field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// The field must carry a non-zero value: non-empty string, non-zero
    /// integer, set optional, set timestamp.
    Required,
    /// String length ceiling, in bytes.
    MaxLen(usize),
    /// Numeric ceiling.
    Max(f64),
    /// RFC-5321-shaped email address.
    Email,
    /// E.164 phone number (`+` followed by up to 15 digits).
    Phone,
    /// 64 lowercase-or-uppercase hex characters.
    Sha256,
    /// The string must itself parse as JSON.
    Json,
    /// The value must be one of the listed strings.
    OneOf(&'static [&'static str]),
}

/// Outcome of checking one rule against one value.
enum Verdict {
    Pass,
    Fail,
    /// The rule cannot judge this value kind — a rule-declaration fault,
    /// not a data problem. Treated as "no violation found".
    NotApplicable,
}

impl Rule {
    /// The rule's tag as it appears in validation reports.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MaxLen(_) | Self::Max(_) => "max",
            Self::Email => "email",
            Self::Phone => "e164",
            Self::Sha256 => "sha256",
            Self::Json => "json",
            Self::OneOf(_) => "oneof",
        }
    }

    /// The rule's parameter as it appears in validation reports.
    pub fn param(&self) -> String {
        match self {
            Self::MaxLen(n) => n.to_string(),
            Self::Max(f) => f.to_string(),
            Self::OneOf(values) => values.join(" "),
            _ => String::new(),
        }
    }

    fn check(&self, value: &FieldValue) -> Verdict {
        match self {
            Self::Required => check_required(value),
            Self::MaxLen(limit) => match value {
                FieldValue::Str(s) => verdict(s.len() <= *limit),
                FieldValue::OptStr(s) => {
                    verdict(s.as_ref().map_or(true, |s| s.len() <= *limit))
                }
                _ => Verdict::NotApplicable,
            },
            Self::Max(limit) => match value {
                FieldValue::UInt(n) => verdict((*n as f64) <= *limit),
                FieldValue::OptUInt(n) => verdict(n.map_or(true, |n| (n as f64) <= *limit)),
                FieldValue::Float(f) => verdict(*f <= *limit),
                _ => Verdict::NotApplicable,
            },
            // Format rules pass on empty values; emptiness is `Required`'s
            // concern.
            Self::Email => check_text(value, is_email),
            Self::Phone => check_text(value, is_e164),
            Self::Sha256 => check_text(value, is_sha256_hex),
            Self::Json => check_text(value, |s| {
                serde_json::from_str::<serde_json::Value>(s).is_ok()
            }),
            Self::OneOf(values) => check_text(value, |s| values.contains(&s)),
        }
    }
}

fn verdict(ok: bool) -> Verdict {
    if ok {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

fn check_required(value: &FieldValue) -> Verdict {
    match value {
        FieldValue::Str(s) => verdict(!s.is_empty()),
        FieldValue::OptStr(s) => verdict(s.as_ref().is_some_and(|s| !s.is_empty())),
        FieldValue::UInt(n) => verdict(*n != 0),
        FieldValue::OptUInt(n) => verdict(n.is_some()),
        FieldValue::Float(f) => verdict(*f != 0.0),
        FieldValue::Time(t) => verdict(t.is_some()),
        // `required` on a boolean would reject `false`; the rule does not
        // apply to booleans.
        FieldValue::Bool(_) => Verdict::NotApplicable,
    }
}

fn check_text(value: &FieldValue, ok: impl Fn(&str) -> bool) -> Verdict {
    match value {
        FieldValue::Str(_) | FieldValue::OptStr(_) => match value.as_text() {
            Some(text) => verdict(ok(text)),
            None => Verdict::Pass,
        },
        _ => Verdict::NotApplicable,
    }
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !s.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_e164(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('+') else {
        return false;
    };
    (1..=15).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0')
}

fn is_sha256_hex(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// One entry in an entity's declared field list: the field's wire name, an
/// accessor lifting its value, and the rules bound to it.
///
/// Declaration order is significant — it is the order violations are
/// reported in.
pub struct FieldSpec<T> {
    /// Wire name of the field, e.g. `"Email"`.
    pub name: &'static str,
    /// Accessor lifting the field's current value out of the entity.
    pub get: fn(&T) -> FieldValue,
    /// Rules checked against the field, in order.
    pub rules: &'static [Rule],
}

/// An entity with a declared field list.
pub trait Validatable {
    /// Entity name as it appears in validation report namespaces.
    const NAME: &'static str;

    /// The entity's declared fields, in declaration order.
    fn field_specs() -> &'static [FieldSpec<Self>]
    where
        Self: Sized;
}

/// Validate every declared field, reporting the first violation.
pub fn validate<T: Validatable + 'static>(entity: &T) -> Result<(), ValidationError> {
    validate_except(entity, &[])
}

/// Validate declared fields, skipping those named in `except`.
///
/// Used by partial-update flows to exclude server-assigned fields that are
/// legitimately absent from a client payload.
pub fn validate_except<T: Validatable + 'static>(
    entity: &T,
    except: &[&str],
) -> Result<(), ValidationError> {
    for spec in T::field_specs() {
        if except.contains(&spec.name) {
            continue;
        }
        let value = (spec.get)(entity);
        for rule in spec.rules {
            match rule.check(&value) {
                Verdict::Fail => return Err(report::<T>(spec, rule, &value)),
                Verdict::Pass | Verdict::NotApplicable => {}
            }
        }
    }
    Ok(())
}

fn report<T: Validatable>(spec: &FieldSpec<T>, rule: &Rule, value: &FieldValue) -> ValidationError {
    let namespace = format!("{}.{}", T::NAME, spec.name);
    ValidationError {
        namespace: namespace.clone(),
        field: spec.name.to_string(),
        struct_namespace: namespace,
        struct_field: spec.name.to_string(),
        tag: rule.tag().to_string(),
        actual_tag: rule.tag().to_string(),
        kind: value.kind().to_string(),
        type_name: value.kind().to_string(),
        value: value.display(),
        param: rule.param(),
        message: format!("{} must be compatible with rule {}", spec.name, rule.tag()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal fake entity exercising the rule walk directly.
    #[derive(Default)]
    struct Probe {
        name: String,
        email: String,
        stock: u64,
    }

    impl Validatable for Probe {
        const NAME: &'static str = "Probe";

        fn field_specs() -> &'static [FieldSpec<Self>] {
            const SPECS: &[FieldSpec<Probe>] = &[
                FieldSpec {
                    name: "Name",
                    get: |p| FieldValue::str(&p.name),
                    rules: &[Rule::Required, Rule::MaxLen(8)],
                },
                FieldSpec {
                    name: "Email",
                    get: |p| FieldValue::str(&p.email),
                    rules: &[Rule::Required, Rule::Email],
                },
                FieldSpec {
                    name: "Stock",
                    get: |p| FieldValue::UInt(p.stock),
                    rules: &[Rule::Max(100.0)],
                },
            ];
            SPECS
        }
    }

    fn valid_probe() -> Probe {
        Probe {
            name: "pump".into(),
            email: "ops@example.com".into(),
            stock: 3,
        }
    }

    #[test]
    fn valid_entity_passes() {
        assert!(validate(&valid_probe()).is_ok());
    }

    #[test]
    fn first_violation_wins_in_declaration_order() {
        // Both Name (required) and Email (format) are violated; the report
        // must name the earlier-declared field.
        let probe = Probe {
            name: String::new(),
            email: "not-an-email".into(),
            stock: 0,
        };
        let err = validate(&probe).unwrap_err();
        assert_eq!(err.field, "Name");
        assert_eq!(err.tag, "required");
    }

    #[test]
    fn rules_checked_in_declared_order_within_a_field() {
        let mut probe = valid_probe();
        probe.name = "far-too-long-name".into();
        let err = validate(&probe).unwrap_err();
        assert_eq!(err.tag, "max");
        assert_eq!(err.param, "8");
    }

    #[test]
    fn report_is_fully_populated() {
        let mut probe = valid_probe();
        probe.email = "nope".into();
        let err = validate(&probe).unwrap_err();
        assert_eq!(err.namespace, "Probe.Email");
        assert_eq!(err.struct_namespace, "Probe.Email");
        assert_eq!(err.field, "Email");
        assert_eq!(err.struct_field, "Email");
        assert_eq!(err.tag, "email");
        assert_eq!(err.actual_tag, "email");
        assert_eq!(err.kind, "string");
        assert_eq!(err.type_name, "string");
        assert_eq!(err.value, "nope");
        assert!(err.message.contains("Email"));
        assert!(err.message.contains("email"));
    }

    #[test]
    fn validate_except_skips_named_fields() {
        let probe = Probe {
            name: String::new(),
            email: "ops@example.com".into(),
            stock: 1,
        };
        assert!(validate(&probe).is_err());
        assert!(validate_except(&probe, &["Name"]).is_ok());
    }

    #[test]
    fn numeric_ceiling_enforced() {
        let mut probe = valid_probe();
        probe.stock = 101;
        let err = validate(&probe).unwrap_err();
        assert_eq!(err.field, "Stock");
        assert_eq!(err.kind, "uint");
    }

    #[test]
    fn format_rules_pass_on_empty_values() {
        for rule in [Rule::Email, Rule::Phone, Rule::Sha256, Rule::Json] {
            assert!(matches!(
                rule.check(&FieldValue::str("")),
                Verdict::Pass
            ));
            assert!(matches!(
                rule.check(&FieldValue::OptStr(None)),
                Verdict::Pass
            ));
        }
    }

    #[test]
    fn misdeclared_rule_is_masked() {
        // Email on an integer is a declaration fault, not a data problem;
        // it must not produce a violation.
        assert!(matches!(
            Rule::Email.check(&FieldValue::UInt(7)),
            Verdict::NotApplicable
        ));
    }

    #[test]
    fn required_does_not_judge_booleans() {
        assert!(matches!(
            Rule::Required.check(&FieldValue::Bool(false)),
            Verdict::NotApplicable
        ));
    }

    // -- Format checks --------------------------------------------------------

    #[test]
    fn email_format() {
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last@sub.example.com"));
        assert!(!is_email("missing-at.example.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@nodot"));
        assert!(!is_email("user name@example.com"));
    }

    #[test]
    fn e164_format() {
        assert!(is_e164("+14155550132"));
        assert!(is_e164("+4930123456"));
        assert!(!is_e164("14155550132"));
        assert!(!is_e164("+0123"));
        assert!(!is_e164("+1415555abc"));
        assert!(!is_e164("+1234567890123456"));
    }

    #[test]
    fn sha256_format() {
        assert!(is_sha256_hex(&"a".repeat(64)));
        assert!(!is_sha256_hex(&"a".repeat(63)));
        assert!(!is_sha256_hex(&"g".repeat(64)));
    }

    #[test]
    fn json_rule_accepts_embedded_json() {
        assert!(matches!(
            Rule::Json.check(&FieldValue::str(r#"["a","b"]"#)),
            Verdict::Pass
        ));
        assert!(matches!(
            Rule::Json.check(&FieldValue::str("not json")),
            Verdict::Fail
        ));
    }

    #[test]
    fn oneof_rule_matches_listed_values() {
        let rule = Rule::OneOf(&["Unread", "Read"]);
        assert!(matches!(rule.check(&FieldValue::str("Read")), Verdict::Pass));
        assert!(matches!(
            rule.check(&FieldValue::str("Archived")),
            Verdict::Fail
        ));
        // Empty passes; `Required` owns emptiness.
        assert!(matches!(rule.check(&FieldValue::str("")), Verdict::Pass));
    }
}
