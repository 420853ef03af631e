//! Domain value objects: Backend, ArtifactKind.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO template text. All render functions live in
//! `crate::templates`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a registry entry in `templates/mod.rs`
//! 4. Done — the totality test enforces step 3

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Backend ───────────────────────────────────────────────────────────────────

/// A supported persistence backend (data-access strategy).
///
/// The backend decides the *body* of every rendered artifact; the artifact
/// set and file names are the same for all backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Generated-client data access (`this.prisma.<camel>...`).
    Prisma,
    /// Repository-injection data access (`@InjectRepository`).
    TypeOrm,
}

impl Backend {
    /// Every supported backend, in display order.
    pub const ALL: [Backend; 2] = [Backend::Prisma, Backend::TypeOrm];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prisma => "prisma",
            Self::TypeOrm => "typeorm",
        }
    }
}

impl Default for Backend {
    /// Prisma is the primary backend; the CLI falls back to it when neither
    /// the flag nor the config names one.
    fn default() -> Self {
        Self::Prisma
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prisma" => Ok(Self::Prisma),
            "typeorm" | "type-orm" => Ok(Self::TypeOrm),
            other => Err(DomainError::UnknownBackend(other.into())),
        }
    }
}

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// One generated source file kind.
///
/// The set is closed: every backend must render every kind (checked by the
/// registry totality test), and a generation run always produces all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Service,
    ServiceSpec,
    Controller,
    ControllerSpec,
    Module,
}

impl ArtifactKind {
    /// Every artifact kind, in the order files are written and reported.
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Service,
        ArtifactKind::ServiceSpec,
        ArtifactKind::Controller,
        ArtifactKind::ControllerSpec,
        ArtifactKind::Module,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::ServiceSpec => "service-spec",
            Self::Controller => "controller",
            Self::ControllerSpec => "controller-spec",
            Self::Module => "module",
        }
    }

    /// Fixed file-name suffix for this kind.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Service => "service.ts",
            Self::ServiceSpec => "service.spec.ts",
            Self::Controller => "controller.ts",
            Self::ControllerSpec => "controller.spec.ts",
            Self::Module => "module.ts",
        }
    }

    /// File name for a module: `<kebab>.<suffix>`.
    pub fn file_name(&self, kebab: &str) -> String {
        format!("{kebab}.{}", self.suffix())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_display_is_lowercase() {
        assert_eq!(Backend::Prisma.to_string(), "prisma");
        assert_eq!(Backend::TypeOrm.to_string(), "typeorm");
    }

    #[test]
    fn backend_from_str_accepts_aliases() {
        assert_eq!("prisma".parse::<Backend>().unwrap(), Backend::Prisma);
        assert_eq!("typeorm".parse::<Backend>().unwrap(), Backend::TypeOrm);
        assert_eq!("type-orm".parse::<Backend>().unwrap(), Backend::TypeOrm);
        assert_eq!("TypeORM".parse::<Backend>().unwrap(), Backend::TypeOrm);
    }

    #[test]
    fn backend_from_str_unknown_errors() {
        assert!("mongoose".parse::<Backend>().is_err());
        assert!("".parse::<Backend>().is_err());
    }

    #[test]
    fn backend_default_is_prisma() {
        assert_eq!(Backend::default(), Backend::Prisma);
    }

    #[test]
    fn artifact_file_names_use_kebab_plus_fixed_suffix() {
        assert_eq!(
            ArtifactKind::Service.file_name("media-user"),
            "media-user.service.ts"
        );
        assert_eq!(
            ArtifactKind::ServiceSpec.file_name("media-user"),
            "media-user.service.spec.ts"
        );
        assert_eq!(
            ArtifactKind::Module.file_name("media"),
            "media.module.ts"
        );
    }

    #[test]
    fn artifact_all_covers_every_kind_once() {
        let mut suffixes: Vec<_> = ArtifactKind::ALL.iter().map(|k| k.suffix()).collect();
        suffixes.sort_unstable();
        suffixes.dedup();
        assert_eq!(suffixes.len(), ArtifactKind::ALL.len());
    }
}
