//! Error types for the think-tool library.

use thiserror::Error;

/// Errors raised at the edges of the log.
///
/// The log operations themselves never fail; these cover configuration
/// input and rendering of structured reports.
#[derive(Error, Debug)]
pub enum ThinkError {
    /// Variant name is not one of the known deployments.
    #[error("Unknown variant '{0}', expected 'think' or 'ponder'")]
    UnknownVariant(String),

    /// Stats report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for think-tool operations.
pub type ThinkResult<T> = Result<T, ThinkError>;
