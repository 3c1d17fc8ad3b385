//! Record validation
//!
//! Input files are parsed into generic [`serde_json::Value`]s first. This module
//! checks the top-level shape (an array of objects) and then each record's
//! fields by their exact JSON tag. A boolean field must be a JSON `true` or
//! `false`; `0`, `"yes"` or `null` are rejected rather than coerced.
//!
//! Only records that pass validation are deserialized into
//! [`OrganizationRecord`] / [`MemberRecord`].

use crate::types::{MemberRecord, OrganizationRecord, RecordKind, ReportError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A JSON object as parsed from an input file
pub type RawRecord = Map<String, Value>;

/// The JSON type a field is required to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTag {
    /// A JSON number representable as `i64`
    Integer,
    /// A non-empty JSON string
    Text,
    /// JSON `true` or `false`
    Boolean,
}

impl FieldTag {
    /// Whether `value` carries exactly this tag
    pub fn accepts(self, value: Option<&Value>) -> bool {
        match (self, value) {
            (FieldTag::Integer, Some(Value::Number(n))) => n.is_i64(),
            (FieldTag::Text, Some(Value::String(s))) => !s.is_empty(),
            (FieldTag::Boolean, Some(Value::Bool(_))) => true,
            _ => false,
        }
    }
}

const ORGANIZATION_FIELDS: &[(&str, FieldTag)] = &[
    ("id", FieldTag::Integer),
    ("name", FieldTag::Text),
    ("top_up", FieldTag::Integer),
    ("email_status", FieldTag::Boolean),
];

const MEMBER_FIELDS: &[(&str, FieldTag)] = &[
    ("id", FieldTag::Integer),
    ("first_name", FieldTag::Text),
    ("last_name", FieldTag::Text),
    ("email", FieldTag::Text),
    ("company_id", FieldTag::Integer),
    ("email_status", FieldTag::Boolean),
    ("active_status", FieldTag::Boolean),
];

// Required to build a member but not part of the member validity rule
const MEMBER_BALANCE_FIELD: (&str, FieldTag) = ("tokens", FieldTag::Integer);

fn first_invalid_field(record: &RawRecord, fields: &[(&'static str, FieldTag)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(name, tag)| !tag.accepts(record.get(*name)))
        .map(|(name, _)| *name)
}

/// Whether `record` is a structurally valid organization
pub fn valid_organization(record: &RawRecord) -> bool {
    first_invalid_field(record, ORGANIZATION_FIELDS).is_none()
}

/// Whether `record` is a structurally valid member
pub fn valid_member(record: &RawRecord) -> bool {
    first_invalid_field(record, MEMBER_FIELDS).is_none()
}

/// Check that a parsed file is an array of objects and return the objects
///
/// # Errors
///
/// Returns `UnexpectedFormat` naming `kind` if the value is not an array, or
/// if any element is not an object.
pub fn expect_records(value: Value, kind: RecordKind) -> Result<Vec<RawRecord>, ReportError> {
    let Value::Array(items) = value else {
        return Err(ReportError::unexpected_format(kind));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => Ok(record),
            _ => Err(ReportError::unexpected_format(kind)),
        })
        .collect()
}

/// Validate an organization record and deserialize it
pub fn parse_organization(record: RawRecord) -> Result<OrganizationRecord, ReportError> {
    if !valid_organization(&record) {
        let field = first_invalid_field(&record, ORGANIZATION_FIELDS).unwrap_or_default();
        return Err(invalid(RecordKind::Organization, field, record));
    }
    deserialize(record, RecordKind::Organization)
}

/// Validate a member record and deserialize it
///
/// On top of [`valid_member`], the starting balance must be an integer.
pub fn parse_member(record: RawRecord) -> Result<MemberRecord, ReportError> {
    if !valid_member(&record) {
        let field = first_invalid_field(&record, MEMBER_FIELDS).unwrap_or_default();
        return Err(invalid(RecordKind::Member, field, record));
    }

    let (name, tag) = MEMBER_BALANCE_FIELD;
    if !tag.accepts(record.get(name)) {
        return Err(invalid(RecordKind::Member, name, record));
    }
    deserialize(record, RecordKind::Member)
}

fn invalid(kind: RecordKind, field: &str, record: RawRecord) -> ReportError {
    ReportError::invalid_record(kind, field, Value::Object(record))
}

fn deserialize<T: DeserializeOwned>(record: RawRecord, kind: RecordKind) -> Result<T, ReportError> {
    let value = Value::Object(record);
    serde_json::from_value(value.clone())
        .map_err(|e| ReportError::invalid_record(kind, &e.to_string(), value))
}
