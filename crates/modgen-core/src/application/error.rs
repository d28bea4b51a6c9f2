//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! specification itself. Specification errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur while loading input or writing artifacts.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No input document exists at the given path.
    #[error("Specification document not found: {path}")]
    SpecNotFound { path: PathBuf },

    /// An input document exists but could not be read.
    #[error("Failed to read specification {path}: {reason}")]
    SpecRead { path: PathBuf, reason: String },

    /// An input document is not a valid interface list.
    #[error("Malformed specification {path}: {reason}")]
    SpecParse { path: PathBuf, reason: String },

    /// Rendering an artifact into its buffer failed.
    #[error("Rendering {artifact} failed: {reason}")]
    RenderingFailed {
        artifact: ArtifactKind,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned by a panicking writer.
    #[error("Adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SpecNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Pass the specification path explicitly: modgen generate path/to/modules.json"
                    .into(),
            ],
            Self::SpecRead { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::SpecParse { .. } => vec![
                "The document must be a JSON array of objects".into(),
                r#"Each object needs "name" (string) and "implementations" (array of strings)"#
                    .into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check the --ipp prefix points somewhere writable".into(),
                "Output from this run is incomplete; do not mix it with earlier output".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SpecNotFound { .. } => ErrorCategory::NotFound,
            Self::SpecParse { .. } => ErrorCategory::Validation,
            Self::SpecRead { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
