//! Schema Registry - structural validation of decoded JSON values.
//!
//! Validation is a pure function over an already-decoded value. Every
//! violated field is reported, so a curator fixing a data file sees the
//! whole list at once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{FieldViolation, ValidationError};
use super::records::{Article, Insurance, StaffMember, TypedRecord, Update, VisitType};

/// The record schemas known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Article,
    VisitType,
    StaffMember,
    Insurance,
    Update,
}

impl SchemaKind {
    /// Every schema, in declaration order.
    pub const ALL: [SchemaKind; 5] = [
        SchemaKind::Article,
        SchemaKind::VisitType,
        SchemaKind::StaffMember,
        SchemaKind::Insurance,
        SchemaKind::Update,
    ];

    /// Snake case identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Article => "article",
            SchemaKind::VisitType => "visit_type",
            SchemaKind::StaffMember => "staff_member",
            SchemaKind::Insurance => "insurance",
            SchemaKind::Update => "update",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemaKind::Article => "Article",
            SchemaKind::VisitType => "VisitType",
            SchemaKind::StaffMember => "StaffMember",
            SchemaKind::Insurance => "Insurance",
            SchemaKind::Update => "Update",
        };
        f.write_str(name)
    }
}

impl FromStr for SchemaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown schema: {}", s))
    }
}

// ============================================================================
// Field reader
// ============================================================================

/// Pulls typed fields out of a JSON object while collecting violations.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            violations: Vec::new(),
        }
    }

    /// Present-and-not-null lookup.
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|v| !v.is_null())
    }

    fn required_str(&mut self, field: &str) -> String {
        match self.present(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                self.violations
                    .push(FieldViolation::wrong_type(field, "string", other));
                String::new()
            }
            None => {
                self.violations.push(FieldViolation::missing(field));
                String::new()
            }
        }
    }

    fn optional_str(&mut self, field: &str) -> Option<String> {
        match self.present(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.violations
                    .push(FieldViolation::wrong_type(field, "string", other));
                None
            }
            None => None,
        }
    }

    fn str_or(&mut self, field: &str, default: &str) -> String {
        self.optional_str(field)
            .unwrap_or_else(|| default.to_string())
    }

    fn required_bool(&mut self, field: &str) -> bool {
        match self.present(field) {
            Some(value) => match coerce_bool(value) {
                Some(b) => b,
                None => {
                    self.violations
                        .push(FieldViolation::wrong_type(field, "boolean", value));
                    false
                }
            },
            None => {
                self.violations.push(FieldViolation::missing(field));
                false
            }
        }
    }

    fn finish<T>(self, kind: SchemaKind, record: T) -> Result<T, ValidationError> {
        if self.violations.is_empty() {
            Ok(record)
        } else {
            Err(ValidationError::new(kind, self.violations))
        }
    }
}

/// Lax boolean reading: JSON booleans, the integers 0 and 1, and the usual
/// textual spellings (case-insensitive).
fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Some(false),
            Some(f) if f == 1.0 => Some(true),
            _ => None,
        },
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

// ============================================================================
// Validation entry points
// ============================================================================

/// Validate a decoded JSON value against the schema selected by `kind`.
pub fn validate(kind: SchemaKind, raw: &Value) -> Result<TypedRecord, ValidationError> {
    match kind {
        SchemaKind::Article => validate_article(raw).map(TypedRecord::Article),
        SchemaKind::VisitType => validate_visit_type(raw).map(TypedRecord::VisitType),
        SchemaKind::StaffMember => validate_staff_member(raw).map(TypedRecord::StaffMember),
        SchemaKind::Insurance => validate_insurance(raw).map(TypedRecord::Insurance),
        SchemaKind::Update => validate_update(raw).map(TypedRecord::Update),
    }
}

/// Run `build` over the fields of `raw`, failing if it is not an object or
/// if any field read recorded a violation.
fn read_record<T>(
    kind: SchemaKind,
    raw: &Value,
    build: impl FnOnce(&mut FieldReader<'_>) -> T,
) -> Result<T, ValidationError> {
    let Some(object) = raw.as_object() else {
        return Err(ValidationError::new(
            kind,
            vec![FieldViolation::wrong_type("$", "object", raw)],
        ));
    };

    let mut reader = FieldReader::new(object);
    let record = build(&mut reader);
    reader.finish(kind, record)
}

/// Validate article data.
pub fn validate_article(raw: &Value) -> Result<Article, ValidationError> {
    read_record(SchemaKind::Article, raw, |r| Article {
        title: r.required_str("title"),
        content: r.required_str("content"),
        category: r.optional_str("category"),
        priority: Some(r.str_or("priority", "low")),
    })
}

/// Validate visit type data.
pub fn validate_visit_type(raw: &Value) -> Result<VisitType, ValidationError> {
    read_record(SchemaKind::VisitType, raw, |r| VisitType {
        visit_type: r.required_str("visit_type"),
        description: r.required_str("description"),
        duration: r.required_str("duration"),
        extra_info: r.str_or("extra_info", ""),
        rules: r.str_or("rules", ""),
    })
}

/// Validate staff member data.
pub fn validate_staff_member(raw: &Value) -> Result<StaffMember, ValidationError> {
    read_record(SchemaKind::StaffMember, raw, |r| StaffMember {
        staff: r.required_str("Staff"),
        ext: r.required_str("Ext"),
    })
}

/// Validate insurance data.
pub fn validate_insurance(raw: &Value) -> Result<Insurance, ValidationError> {
    read_record(SchemaKind::Insurance, raw, |r| Insurance {
        insurance_name: r.required_str("insurance_name"),
        portal_name: r.required_str("portal_name"),
        website: r.required_str("website"),
        pcp_change_required: r.required_bool("pcp_change_required"),
        notes: r.str_or("notes", ""),
    })
}

/// Validate update data.
pub fn validate_update(raw: &Value) -> Result<Update, ValidationError> {
    read_record(SchemaKind::Update, raw, |r| Update {
        title: r.required_str("title"),
        description: r.required_str("description"),
        date: r.required_str("date"),
        priority: r.required_str("priority"),
        category: r.required_str("category"),
    })
}

// ============================================================================
// Whole-payload validation
// ============================================================================

/// A record inside a resource payload that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// JSON pointer of the record within the payload (empty for the root).
    pub pointer: String,

    /// What was wrong with it.
    pub error: ValidationError,
}

/// Outcome of validating every record of a resource payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of records examined.
    pub checked: usize,

    /// Records that failed, in payload order.
    pub failures: Vec<RecordFailure>,
}

impl ValidationReport {
    /// True when every record passed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// One line per failing record, for logs and error envelopes.
    pub fn messages(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|f| {
                let location = if f.pointer.is_empty() { "/" } else { f.pointer.as_str() };
                format!("{}: {}", location, f.error)
            })
            .collect()
    }

    fn check(&mut self, kind: SchemaKind, pointer: String, record: &Value) {
        self.checked += 1;
        if let Err(error) = validate(kind, record) {
            self.failures.push(RecordFailure { pointer, error });
        }
    }
}

/// Validate every record found in a resource payload.
///
/// - an array: each element is a record;
/// - an object: every array of objects nested anywhere below it is a record
///   list, and each of its elements is a record (records themselves are not
///   searched further);
/// - an object holding no record list, or a scalar: the value itself is the
///   record.
pub fn validate_collection(kind: SchemaKind, payload: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    match payload {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                report.check(kind, format!("/{}", i), item);
            }
        }
        Value::Object(_) => {
            let mut lists = Vec::new();
            collect_record_lists(payload, String::new(), &mut lists);

            if lists.is_empty() {
                report.check(kind, String::new(), payload);
            }
            for (pointer, items) in lists {
                for (i, item) in items.iter().enumerate() {
                    report.check(kind, format!("{}/{}", pointer, i), item);
                }
            }
        }
        other => report.check(kind, String::new(), other),
    }

    report
}

/// Depth-first search for arrays holding at least one object, in document
/// order.
fn collect_record_lists<'a>(
    value: &'a Value,
    pointer: String,
    out: &mut Vec<(String, &'a [Value])>,
) {
    match value {
        Value::Array(items) if items.iter().any(Value::is_object) => {
            out.push((pointer, items.as_slice()))
        }
        Value::Object(object) => {
            for (name, member) in object {
                let child = format!("{}/{}", pointer, escape_pointer(name));
                collect_record_lists(member, child, out);
            }
        }
        _ => {}
    }
}

fn escape_pointer(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_priority_defaults_to_low() {
        let article = validate_article(&json!({
            "title": "Prescription refills",
            "content": "Refills take 48 hours"
        }))
        .unwrap();

        assert_eq!(article.priority.as_deref(), Some("low"));
        assert_eq!(article.category, None);
    }

    #[test]
    fn test_article_null_optional_uses_default() {
        let article = validate_article(&json!({
            "title": "t",
            "content": "c",
            "priority": null
        }))
        .unwrap();
        assert_eq!(article.priority.as_deref(), Some("low"));
    }

    #[test]
    fn test_insurance_missing_pcp_flag_is_rejected() {
        let err = validate_insurance(&json!({
            "insurance_name": "Aetna",
            "portal_name": "Availity",
            "website": "https://availity.com"
        }))
        .unwrap_err();

        assert_eq!(err.kind, SchemaKind::Insurance);
        assert!(err.has_field("pcp_change_required"));
        assert_eq!(err.violations.len(), 1);
    }

    #[test]
    fn test_insurance_boolean_accepts_lax_spellings() {
        for (raw, expected) in [
            (json!("true"), true),
            (json!("Yes"), true),
            (json!("1"), true),
            (json!(1), true),
            (json!("false"), false),
            (json!("no"), false),
            (json!("0"), false),
            (json!(0), false),
        ] {
            let insurance = validate_insurance(&json!({
                "insurance_name": "Aetna",
                "portal_name": "Availity",
                "website": "https://availity.com",
                "pcp_change_required": raw
            }))
            .unwrap();
            assert_eq!(insurance.pcp_change_required, expected, "{}", raw);
        }
    }

    #[test]
    fn test_insurance_boolean_rejects_other_values() {
        for raw in [json!("maybe"), json!(2), json!(["true"])] {
            let err = validate_insurance(&json!({
                "insurance_name": "Aetna",
                "portal_name": "Availity",
                "website": "https://availity.com",
                "pcp_change_required": raw
            }))
            .unwrap_err();
            assert!(err.has_field("pcp_change_required"));
            assert!(err.violations[0].message.starts_with("expected boolean"));
        }
    }

    #[test]
    fn test_insurance_notes_default_empty() {
        let insurance = validate_insurance(&json!({
            "insurance_name": "Magnacare",
            "portal_name": "Magnacare Provider",
            "website": "https://magnacare.com",
            "pcp_change_required": false
        }))
        .unwrap();
        assert_eq!(insurance.notes, "");
        assert!(!insurance.pcp_change_required);
    }

    #[test]
    fn test_staff_member_missing_ext_is_rejected() {
        let err = validate_staff_member(&json!({"Staff": "Billing"})).unwrap_err();
        assert!(err.has_field("Ext"));
    }

    #[test]
    fn test_every_violation_is_reported() {
        let err = validate(
            SchemaKind::VisitType,
            &json!({"visit_type": 3, "rules": false}),
        )
        .unwrap_err();

        let fields: Vec<_> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["visit_type", "description", "duration", "rules"]);
    }

    #[test]
    fn test_visit_type_defaults() {
        let visit = validate_visit_type(&json!({
            "visit_type": "New Patient",
            "description": "First visit",
            "duration": "40 min"
        }))
        .unwrap();
        assert_eq!(visit.extra_info, "");
        assert_eq!(visit.rules, "");
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = validate(SchemaKind::Update, &json!(["not", "a", "record"])).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "$");
    }

    #[test]
    fn test_update_requires_all_fields() {
        let err = validate_update(&json!({"title": "Notice"})).unwrap_err();
        assert_eq!(err.violations.len(), 4);
    }

    #[test]
    fn test_schema_kind_from_str() {
        assert_eq!("staff_member".parse::<SchemaKind>(), Ok(SchemaKind::StaffMember));
        assert!("patient".parse::<SchemaKind>().is_err());
    }

    #[test]
    fn test_collection_array_reports_pointers() {
        let report = validate_collection(
            SchemaKind::StaffMember,
            &json!([
                {"Staff": "Front Desk", "Ext": "100"},
                {"Staff": "Billing"}
            ]),
        );

        assert_eq!(report.checked, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].pointer, "/1");
        assert!(report.messages()[0].starts_with("/1: StaffMember validation failed"));
    }

    #[test]
    fn test_collection_object_with_arrays() {
        let report = validate_collection(
            SchemaKind::StaffMember,
            &json!({
                "title": "Extensions",
                "staff/main": [{"Staff": "Nurse", "Ext": "204"}, {"Ext": "205"}]
            }),
        );

        assert_eq!(report.checked, 2);
        assert_eq!(report.failures[0].pointer, "/staff~1main/1");
    }

    #[test]
    fn test_collection_nested_record_lists() {
        let appointments = json!({
            "AppointmentGuide": {
                "title": "Appointment Guide",
                "visit_types": [
                    {"visit_type": "New Patient", "description": "First visit", "duration": "40 min"},
                    {"visit_type": "Follow Up", "description": "Check in", "duration": "20 min"}
                ]
            }
        });
        let report = validate_collection(SchemaKind::VisitType, &appointments);
        assert_eq!(report.checked, 2);
        assert!(report.is_clean());

        let insurance = json!({
            "InsurancePortals": {
                "accepted_insurances": [
                    {
                        "insurance_name": "Aetna",
                        "portal_name": "Availity",
                        "website": "https://availity.com",
                        "pcp_change_required": true
                    },
                    {"insurance_name": "Cigna"}
                ]
            }
        });
        let report = validate_collection(SchemaKind::Insurance, &insurance);
        assert_eq!(report.checked, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].pointer,
            "/InsurancePortals/accepted_insurances/1"
        );
    }

    #[test]
    fn test_collection_skips_scalar_arrays() {
        let report = validate_collection(
            SchemaKind::StaffMember,
            &json!({
                "tags": ["front", "back"],
                "StaffExtensions": [{"Staff": "Nurse", "Ext": "204"}]
            }),
        );
        assert_eq!(report.checked, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_collection_single_record() {
        let report = validate_collection(
            SchemaKind::StaffMember,
            &json!({"Staff": "Nurse", "Ext": "204"}),
        );
        assert_eq!(report.checked, 1);
        assert!(report.is_clean());
    }
}
