pub mod contest;
pub mod error;
pub mod merged_problem;
pub mod problem;
pub mod schema;
pub mod shared;
pub mod submission;

pub use contest::{Contest, is_contest};
pub use error::RecordError;
pub use merged_problem::{MergedProblem, is_merged_problem};
pub use problem::{Problem, is_problem};
pub use schema::{FieldKind, FieldRule, FieldSpec, matches_shape};
pub use shared::{get_property, has_property};
pub use submission::{Submission, is_submission};
