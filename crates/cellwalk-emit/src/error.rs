//! Error types for traversal emission.

use thiserror::Error;

/// Errors that can occur during traversal generation.
#[derive(Error, Debug)]
pub enum EmitError {
    /// Requested unroll depth is not a positive level count.
    #[error("traversal depth must be at least 1, got {0}")]
    InvalidDepth(i32),
}

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, EmitError>;
