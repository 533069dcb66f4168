//! Error types for gridpage document generation.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for document generation.
///
/// Grouping and layout never fail; everything here comes from validation,
/// record loading, or persisting the finished document.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Convenience Result type alias for ReportError.
pub type Result<T> = std::result::Result<T, ReportError>;
