//! Error types

/// A column type name that is not one of `number`, `date` or `string`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column type: {value:?} (expected number, date or string)")]
pub struct ParseColumnTypeError {
    /// The rejected input, as given.
    pub value: String,
}

impl ParseColumnTypeError {
    /// Creates a new error for the given input.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
