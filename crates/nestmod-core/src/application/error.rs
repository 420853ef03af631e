//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;
use crate::templates::TemplateError;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target module directory already exists. Refusing to write protects
    /// hand-edited code; nothing is mutated when this fires.
    #[error("module directory already exists at {path}")]
    DirectoryExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The template registry is misconfigured (a bug in the tool itself).
    #[error("template registry misconfigured: {0}")]
    Template(#[from] TemplateError),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different module name".into(),
                format!(
                    "Or inspect and remove it first: rm -rf {}",
                    path.display()
                ),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Template(_) => vec![
                "This is a bug in nestmod's template registry".into(),
                "Please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } | Self::Template(_) => ErrorCategory::Internal,
        }
    }
}
