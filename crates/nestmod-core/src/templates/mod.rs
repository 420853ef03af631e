//! Template registry: the backend strategy table.
//!
//! # Design Rationale
//!
//! Backend selection is a closed mapping from [`Backend`] to a slice of
//! `(ArtifactKind, render fn)` entries, not cascading conditionals. Adding a
//! backend means adding one [`BackendTemplates`] entry to
//! [`TEMPLATE_REGISTRY`] — the totality test below then forces the new entry
//! to cover every artifact kind.
//!
//! Render functions are pure: `fn(&ModuleNames) -> String`, no I/O, no state.
//! A lookup miss ([`TemplateError`]) means the registry itself is
//! misconfigured — it is an internal fault, never a user error.

use serde::Serialize;
use thiserror::Error;

use crate::domain::{ArtifactKind, Backend, ModuleNames};

mod prisma;
mod typeorm;

// ── Registry types ────────────────────────────────────────────────────────────

/// A pure render function: naming variants in, source text out.
pub type RenderFn = fn(&ModuleNames) -> String;

/// Every render function one backend supplies.
#[derive(Debug, Clone, Copy)]
pub struct BackendTemplates {
    /// The backend this entry describes.
    pub backend: Backend,

    /// One `(kind, render)` pair per artifact kind.
    ///
    /// The contract is total: every [`ArtifactKind`] must appear exactly
    /// once. Enforced by `registry_is_total_for_every_backend` below.
    pub artifacts: &'static [(ArtifactKind, RenderFn)],
}

/// Single source of truth for backend template sets.
///
/// To add a backend: add one entry here (and the enum variant). No `match`
/// arms elsewhere.
pub static TEMPLATE_REGISTRY: &[BackendTemplates] = &[
    BackendTemplates {
        backend: Backend::Prisma,
        artifacts: &[
            (ArtifactKind::Service, prisma::service),
            (ArtifactKind::ServiceSpec, prisma::service_spec),
            (ArtifactKind::Controller, prisma::controller),
            (ArtifactKind::ControllerSpec, prisma::controller_spec),
            (ArtifactKind::Module, prisma::module),
        ],
    },
    BackendTemplates {
        backend: Backend::TypeOrm,
        artifacts: &[
            (ArtifactKind::Service, typeorm::service),
            (ArtifactKind::ServiceSpec, typeorm::service_spec),
            (ArtifactKind::Controller, typeorm::controller),
            (ArtifactKind::ControllerSpec, typeorm::controller_spec),
            (ArtifactKind::Module, typeorm::module),
        ],
    },
];

// ── Errors ────────────────────────────────────────────────────────────────────

/// Registry misconfiguration.
///
/// Both variants indicate the tool itself is broken, not the user's input:
/// the CLI treats them as fatal internal errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no template set registered for backend '{backend}'")]
    UnknownBackend { backend: Backend },

    #[error("backend '{backend}' has no template for artifact kind '{kind}'")]
    MissingArtifact { backend: Backend, kind: ArtifactKind },
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// One generated source file: relative file name plus rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub content: String,
}

/// Look up the template set for a backend.
pub fn templates_for(backend: Backend) -> Result<&'static BackendTemplates, TemplateError> {
    TEMPLATE_REGISTRY
        .iter()
        .find(|t| t.backend == backend)
        .ok_or(TemplateError::UnknownBackend { backend })
}

/// Render one artifact kind for one backend.
pub fn render(
    backend: Backend,
    kind: ArtifactKind,
    names: &ModuleNames,
) -> Result<String, TemplateError> {
    let set = templates_for(backend)?;
    let (_, render_fn) = set
        .artifacts
        .iter()
        .find(|(k, _)| *k == kind)
        .ok_or(TemplateError::MissingArtifact { backend, kind })?;
    Ok(render_fn(names))
}

/// Render the full artifact set for one generation run.
///
/// Ordered by [`ArtifactKind::ALL`]; file names are unique by construction
/// (one fixed suffix per kind).
pub fn render_set(backend: Backend, names: &ModuleNames) -> Result<Vec<Artifact>, TemplateError> {
    ArtifactKind::ALL
        .iter()
        .map(|&kind| {
            Ok(Artifact {
                kind,
                file_name: kind.file_name(names.kebab()),
                content: render(backend, kind, names)?,
            })
        })
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────
