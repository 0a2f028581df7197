use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;
use crate::schema::{self, FieldKind::Str, FieldRule::Required, FieldSpec};

const SHAPE: &str = "Problem";

/// A bare problem as listed by the upstream API, without statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub contest_id: String,
    pub title: String,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", Required(Str)),
    FieldSpec::new("contest_id", Required(Str)),
    FieldSpec::new("title", Required(Str)),
];

/// Returns true iff `value` conforms to the [`Problem`] shape.
pub fn is_problem(value: &Value) -> bool {
    schema::matches_shape(value, FIELDS)
}

impl Problem {
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        schema::decode(value, FIELDS, SHAPE)
    }
}
