//! Domain-layer errors: invalid user input, nothing else.
//!
//! Orchestration failures live in `application::ApplicationError`; registry
//! misconfiguration lives in `templates::TemplateError`.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to thread through reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The raw module name cannot be turned into identifiers/route segments.
    #[error("invalid module name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The backend selector does not name a registered strategy.
    #[error("unknown backend: {0}")]
    UnknownBackend(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Module name '{}' is invalid: {}", name, reason),
                "Use a single word or a pre-cased compound (letters and digits only)".into(),
                "Examples: media, MediaUser, invoiceLine".into(),
            ],
            Self::UnknownBackend(backend) => vec![
                format!("'{}' is not a supported backend", backend),
                "Supported backends: prisma, typeorm".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::UnknownBackend(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
