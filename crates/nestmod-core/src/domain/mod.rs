//! Core domain layer for nestmod.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Deterministic**: Same input, same output — always

pub mod backend;
pub mod error;
pub mod names;

// Re-exports for convenience
pub use backend::{ArtifactKind, Backend};
pub use error::{DomainError, ErrorCategory};
pub use names::ModuleNames;
