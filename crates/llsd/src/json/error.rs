use thiserror::Error;

/// Error type for JSON parsing.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// An integral number does not fit in 32 bits under
    /// [`IntegerOverflow::Error`](crate::IntegerOverflow::Error).
    #[error("integer {literal} does not fit in 32 bits")]
    IntegerOverflow { literal: String },
    #[error("container nesting exceeds depth limit {limit}")]
    DepthLimitExceeded { limit: usize },
}
