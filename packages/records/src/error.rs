use thiserror::Error;

/// Errors from the typed-decode path.
///
/// The boolean shape guards never produce errors; only `from_value`
/// narrowing does.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The value does not satisfy the record's shape.
    #[error("value does not have the {shape} shape")]
    ShapeMismatch { shape: &'static str },

    /// The shape matched but typed deserialization failed (e.g. a
    /// fractional number where an integer id is declared).
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}
