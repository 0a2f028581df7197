use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;
use crate::schema::{
    self, FieldSpec,
    FieldKind::{Num, Str},
    FieldRule::{Nullable, Required},
};

const SHAPE: &str = "Submission";

/// A single submission as reported by the upstream API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    /// Submission time, seconds since the Unix epoch.
    pub epoch_second: i64,
    pub problem_id: String,
    pub contest_id: String,
    pub user_id: String,
    pub language: String,
    pub point: f64,
    /// Source length in bytes.
    pub length: i64,
    /// Judge verdict label, e.g. "AC" or "WA".
    pub result: String,
    /// Milliseconds; null until the judge has run the submission.
    pub execution_time: Option<i64>,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", Required(Num)),
    FieldSpec::new("epoch_second", Required(Num)),
    FieldSpec::new("problem_id", Required(Str)),
    FieldSpec::new("contest_id", Required(Str)),
    FieldSpec::new("user_id", Required(Str)),
    FieldSpec::new("language", Required(Str)),
    FieldSpec::new("point", Required(Num)),
    FieldSpec::new("length", Required(Num)),
    FieldSpec::new("result", Required(Str)),
    FieldSpec::new("execution_time", Nullable(Num)),
];

/// Returns true iff `value` conforms to the [`Submission`] shape.
pub fn is_submission(value: &Value) -> bool {
    schema::matches_shape(value, FIELDS)
}

impl Submission {
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        schema::decode(value, FIELDS, SHAPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission() -> Value {
        json!({
            "id": 778230,
            "epoch_second": 1465667695,
            "problem_id": "abc042_b",
            "contest_id": "abc042",
            "user_id": "kirika",
            "language": "C++14 (GCC 5.4.1)",
            "point": 200.0,
            "length": 512,
            "result": "AC",
            "execution_time": 1,
        })
    }

    #[test]
    fn accepts_judged_and_unjudged_submissions() {
        assert!(is_submission(&submission()));

        let mut pending = submission();
        pending["result"] = json!("WJ");
        pending["execution_time"] = json!(null);
        assert!(is_submission(&pending));
    }

    #[test]
    fn execution_time_key_must_exist() {
        let mut value = submission();
        value.as_object_mut().unwrap().remove("execution_time");
        assert!(!is_submission(&value));
    }

    #[test]
    fn rejects_mistyped_fields() {
        let mut value = submission();
        value["id"] = json!("778230");
        assert!(!is_submission(&value));

        let mut value = submission();
        value["point"] = json!(null);
        assert!(!is_submission(&value));
    }

    #[test]
    fn from_value_round_trips() {
        let submission = Submission::from_value(submission()).unwrap();
        assert_eq!(submission.result, "AC");
        assert_eq!(submission.execution_time, Some(1));
        assert_eq!(submission.point, 200.0);
    }
}
