//! Nestmod Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the nestmod
//! module generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          nestmod-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (GenerateService)             │
//! │    render → materialize → register      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Port (Trait)           │
//! │           (Filesystem)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    nestmod-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Pure Logic (No I/O)              │
//! │  (ModuleNames, template registry, the   │
//! │        aggregator patch algorithm)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use nestmod_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> NestmodResult<()> {
//! let names = ModuleNames::derive("MediaUser")?;
//!
//! let service = GenerateService::new(filesystem);
//! let report = service.generate(&GenerateRequest {
//!     module_dir: PathBuf::from("apps/api/src").join(names.kebab()),
//!     aggregator_path: PathBuf::from("apps/api/src/app.module.ts"),
//!     names,
//!     backend: Backend::Prisma,
//! })?;
//! # let _ = report;
//! # Ok(())
//! # }
//! ```

// The aggregator patcher (the one genuinely stateful algorithm)
pub mod aggregator;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export error types
pub mod error;

// The backend template registry
pub mod templates;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::aggregator::{PatchOutcome, PatchedAggregator, register_module};
    pub use crate::application::{
        GenerateReport, GenerateRequest, GenerateService, Registration, ports::Filesystem,
    };
    pub use crate::domain::{ArtifactKind, Backend, ModuleNames};
    pub use crate::error::{NestmodError, NestmodResult};
    pub use crate::templates::{Artifact, TEMPLATE_REGISTRY};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
