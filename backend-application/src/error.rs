use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// A discriminant passed validation but no dispatch branch accepted it.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// Store and port failures, passed through as-is.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
