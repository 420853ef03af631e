//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the one
//! high-level use case this tool has: "generate and register a module".

pub mod generate_service;

pub use generate_service::{GenerateReport, GenerateRequest, GenerateService, Registration};
