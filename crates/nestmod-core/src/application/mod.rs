//! Application layer for nestmod.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`,
//! `crate::templates` and `crate::aggregator`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateReport, GenerateRequest, GenerateService, Registration};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
