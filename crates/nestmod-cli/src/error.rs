//! Comprehensive error handling for the nestmod CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Severity-aware logging

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use nestmod_core::error::{ErrorCategory as CoreCategory, NestmodError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `nestmod-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Generation failed: {0}")]
    Core(#[from] NestmodError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or applied.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file (.nestmod.toml)".into(),
                "Valid keys: defaults.backend, paths.source_root, paths.app_module".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
///
/// The process exit code is binary (0 success / 1 failure) per the tool's
/// contract; categories only drive styling and log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, precondition conflicts).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use nestmod_core::application::ApplicationError;
    use nestmod_core::domain::DomainError;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn invalid_name_suggestions_show_examples() {
        let err = CliError::Core(
            DomainError::InvalidName {
                name: "2fa".into(),
                reason: "name must start with an ASCII letter".into(),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("MediaUser")));
    }

    #[test]
    fn directory_exists_suggests_removal() {
        let err = CliError::Core(
            ApplicationError::DirectoryExists {
                path: PathBuf::from("apps/api/src/media"),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("rm -rf")));
    }

    #[test]
    fn config_error_suggestions_name_the_file() {
        let err = CliError::ConfigError {
            message: "bad toml".into(),
            source: None,
        };
        assert!(err.suggestions().iter().any(|s| s.contains(".nestmod.toml")));
    }

    // ── categories ────────────────────────────────────────────────────────

    #[test]
    fn invalid_name_is_a_user_error() {
        let err = CliError::Core(
            DomainError::InvalidName {
                name: "".into(),
                reason: "name cannot be empty".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn directory_exists_is_a_user_error() {
        let err = CliError::Core(
            ApplicationError::DirectoryExists {
                path: PathBuf::from("x"),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::Core(
            ApplicationError::DirectoryExists {
                path: PathBuf::from("/tmp/x"),
            }
            .into(),
        );
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
