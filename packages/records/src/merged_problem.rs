use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;
use crate::schema::{
    self, FieldSpec,
    FieldKind::{Num, Str},
    FieldRule::{Nullable, OptionalNullable, Required},
};
use crate::shared::double_option;

const SHAPE: &str = "MergedProblem";

/// A problem merged with the statistics of its notable solutions.
///
/// Mirrors the JSON object delivered by the upstream statistics API.
/// Decoded once at the trust boundary and read-only afterwards; the
/// statistics blocks are null when no accepted submission exists yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedProblem {
    pub id: String,
    pub contest_id: String,
    pub title: String,

    /// First accepted submission.
    pub first_user_id: Option<String>,
    pub first_contest_id: Option<String>,
    pub first_submission_id: Option<i64>,

    /// Fastest accepted submission.
    pub fastest_user_id: Option<String>,
    pub fastest_contest_id: Option<String>,
    pub fastest_submission_id: Option<i64>,
    /// Execution time of the fastest submission, milliseconds.
    pub execution_time: Option<i64>,

    /// Shortest accepted submission.
    pub shortest_user_id: Option<String>,
    pub shortest_contest_id: Option<String>,
    pub shortest_submission_id: Option<i64>,
    /// Source length of the shortest submission, bytes.
    pub source_code_length: Option<i64>,

    pub solver_count: Option<i64>,

    /// Score of the problem. Unlike the nullable statistics fields the
    /// key itself may be missing: `None` = absent, `Some(None)` = null.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub point: Option<Option<f64>>,
}

/// Field rules for [`MergedProblem`], in wire declaration order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", Required(Str)),
    FieldSpec::new("contest_id", Required(Str)),
    FieldSpec::new("title", Required(Str)),
    FieldSpec::new("first_user_id", Nullable(Str)),
    FieldSpec::new("first_contest_id", Nullable(Str)),
    FieldSpec::new("first_submission_id", Nullable(Num)),
    FieldSpec::new("fastest_user_id", Nullable(Str)),
    FieldSpec::new("fastest_contest_id", Nullable(Str)),
    FieldSpec::new("fastest_submission_id", Nullable(Num)),
    FieldSpec::new("execution_time", Nullable(Num)),
    FieldSpec::new("shortest_user_id", Nullable(Str)),
    FieldSpec::new("shortest_contest_id", Nullable(Str)),
    FieldSpec::new("shortest_submission_id", Nullable(Num)),
    FieldSpec::new("source_code_length", Nullable(Num)),
    FieldSpec::new("solver_count", Nullable(Num)),
    FieldSpec::new("point", OptionalNullable(Num)),
];

/// Returns true iff `value` conforms to the [`MergedProblem`] shape.
///
/// On a true verdict the caller may read the fields directly or decode
/// the value into [`MergedProblem`] without further checks. Malformed
/// input of any kind, including non-objects, yields false; the check
/// never panics and never mutates its argument.
pub fn is_merged_problem(value: &Value) -> bool {
    schema::matches_shape(value, FIELDS)
}

impl MergedProblem {
    /// Decodes a value that has already crossed the JSON parsing layer.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        schema::decode(value, FIELDS, SHAPE)
    }
}
