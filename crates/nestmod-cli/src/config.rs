//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config FILE` (must exist and parse when given)
//! 3. `.nestmod.toml` in the current directory
//! 4. The platform config dir (`directories::ProjectDirs`)
//! 5. Built-in defaults (always present)
//!
//! Absent keys in a config file fall back to their defaults, so a file may
//! set only `defaults.backend` and nothing else.

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generation.
    pub defaults: Defaults,
    /// Conventional workspace paths.
    pub paths: Paths,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Backend used when `--backend` is not passed (`prisma` / `typeorm`).
    pub backend: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Directory module directories are created under.
    pub source_root: PathBuf,
    /// The aggregator file modules are registered in.
    pub app_module: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("apps/api/src"),
            app_module: PathBuf::from("apps/api/src/app.module.ts"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path that cannot be read or parsed is an error;
    /// the conventional locations are optional and silently skipped when
    /// absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::load_file(path);
        }

        for candidate in [PathBuf::from(".nestmod.toml"), Self::config_path()] {
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn load_file(path: &PathBuf) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.nestmod.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "nestmod", "nestmod")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".nestmod.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.backend, None);
    }

    #[test]
    fn default_paths_follow_the_api_convention() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.source_root, PathBuf::from("apps/api/src"));
        assert_eq!(
            cfg.paths.app_module,
            PathBuf::from("apps/api/src/app.module.ts")
        );
    }

    #[test]
    fn partial_config_file_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str("[defaults]\nbackend = \"typeorm\"\n").unwrap();
        assert_eq!(cfg.defaults.backend.as_deref(), Some("typeorm"));
        assert_eq!(cfg.paths.source_root, PathBuf::from("apps/api/src"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn paths_section_is_overridable() {
        let cfg: AppConfig = toml::from_str(
            "[paths]\nsource_root = \"src/modules\"\napp_module = \"src/app.module.ts\"\n",
        )
        .unwrap();
        assert_eq!(cfg.paths.source_root, PathBuf::from("src/modules"));
        assert_eq!(cfg.paths.app_module, PathBuf::from("src/app.module.ts"));
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // No .nestmod.toml in the crate root during tests.
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.defaults.backend, None);
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
