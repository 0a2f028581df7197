use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;
use crate::schema::{
    self, FieldSpec,
    FieldKind::{Num, Str},
    FieldRule::Required,
};

const SHAPE: &str = "Contest";

/// A contest as listed by the upstream API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: String,
    /// Contest start, seconds since the Unix epoch.
    pub start_epoch_second: i64,
    pub duration_second: i64,
    pub title: String,
    /// Rated range label, e.g. "All" or " ~ 1199" ("-" when unrated).
    pub rate_change: String,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", Required(Str)),
    FieldSpec::new("start_epoch_second", Required(Num)),
    FieldSpec::new("duration_second", Required(Num)),
    FieldSpec::new("title", Required(Str)),
    FieldSpec::new("rate_change", Required(Str)),
];

/// Returns true iff `value` conforms to the [`Contest`] shape.
pub fn is_contest(value: &Value) -> bool {
    schema::matches_shape(value, FIELDS)
}

impl Contest {
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        schema::decode(value, FIELDS, SHAPE)
    }
}
