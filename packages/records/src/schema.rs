use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::RecordError;
use crate::shared::get_property;

/// Primitive JSON kind a record field is declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string.
    Str,
    /// JSON number, integer or floating point.
    Num,
}

impl FieldKind {
    /// Exact runtime kind test. No coercion: `"5"` is not a number.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Str => value.is_string(),
            Self::Num => value.is_number(),
        }
    }
}

/// Optionality rule for a single record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    /// Key must be present and hold the declared kind.
    Required(FieldKind),
    /// Key must be present; the value is the declared kind or null.
    /// A missing key fails even though null is accepted.
    Nullable(FieldKind),
    /// Key may be missing entirely; when present, the value is the
    /// declared kind or null.
    OptionalNullable(FieldKind),
}

/// One field of a record schema.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub const fn new(name: &'static str, rule: FieldRule) -> Self {
        Self { name, rule }
    }
}

/// Checks a decoded value against a record schema.
///
/// The value must be a JSON object. Field rules are evaluated left to
/// right in declaration order as a short-circuiting conjunction: the
/// first failing field rejects without inspecting the rest. Never
/// panics and never mutates its argument, so the verdict holds for the
/// value at the moment of the call.
pub fn matches_shape(value: &Value, fields: &[FieldSpec]) -> bool {
    value.is_object() && fields.iter().all(|spec| field_matches(value, spec))
}

fn field_matches(value: &Value, spec: &FieldSpec) -> bool {
    match (spec.rule, get_property(value, spec.name)) {
        (FieldRule::Required(kind), Some(v)) => kind.matches(v),
        (FieldRule::Nullable(kind) | FieldRule::OptionalNullable(kind), Some(v)) => {
            v.is_null() || kind.matches(v)
        }
        (FieldRule::OptionalNullable(_), None) => true,
        (FieldRule::Required(_) | FieldRule::Nullable(_), None) => false,
    }
}

/// Runs the shape guard, then deserializes the value into its typed
/// record.
///
/// The guard runs first on purpose: serde maps a missing key onto
/// `None` for `Option` fields, so deserialization alone would accept
/// records whose nullable keys are absent, which the wire contract
/// forbids.
pub fn decode<T>(value: Value, fields: &[FieldSpec], shape: &'static str) -> Result<T, RecordError>
where
    T: DeserializeOwned,
{
    if !matches_shape(&value, fields) {
        debug!(shape, "Decoded value rejected by shape guard");
        return Err(RecordError::ShapeMismatch { shape });
    }
    Ok(serde_json::from_value(value)?)
}
