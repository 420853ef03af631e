//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Render the artifact set for the chosen backend
//! 2. Materialize it into a fresh module directory
//! 3. Register the module in the aggregator file
//!
//! Steps 1-2 are all-or-refuse: an existing target directory aborts before
//! anything is written. Step 3 is best-effort — by the time the patcher runs
//! the artifacts are already safely on disk, so a patch failure degrades to a
//! warning in the report instead of failing the run.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    aggregator::{self, PatchOutcome},
    application::{ApplicationError, ports::Filesystem},
    domain::{Backend, ModuleNames},
    error::NestmodResult,
    templates::{self, Artifact},
};

/// Everything one generation run needs to know.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub names: ModuleNames,
    pub backend: Backend,
    /// Directory the artifact set is written into (`<root>/<kebab>`).
    pub module_dir: PathBuf,
    /// The aggregator file to register the module in (`app.module.ts`).
    pub aggregator_path: PathBuf,
}

/// How the registration step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The patcher ran; see the outcome for what it did.
    Outcome(PatchOutcome),
    /// The patcher hit an I/O failure. The module files are already written;
    /// the operator registers the module by hand.
    Failed { reason: String },
}

/// What one generation run produced.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub module_dir: PathBuf,
    pub backend: Backend,
    /// Artifact file names in write order.
    pub written: Vec<String>,
    pub registration: Registration,
}

/// Main generation service.
///
/// Owns no state beyond the injected filesystem port; everything else is
/// pure and lives in `domain`, `templates` and `aggregator`.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate a new module: render, materialize, register.
    #[instrument(
        skip_all,
        fields(
            module = %request.names,
            backend = %request.backend,
            module_dir = %request.module_dir.display(),
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> NestmodResult<GenerateReport> {
        info!("Generating {} module", request.names);

        let artifacts = templates::render_set(request.backend, &request.names)
            .map_err(ApplicationError::from)?;

        self.materialize(&request.module_dir, &artifacts)?;

        let registration = match self.register(&request.aggregator_path, &request.names) {
            Ok(outcome) => Registration::Outcome(outcome),
            Err(e) => {
                warn!(error = %e, "aggregator registration failed");
                Registration::Failed {
                    reason: e.to_string(),
                }
            }
        };

        info!(files = artifacts.len(), "Generation completed");

        Ok(GenerateReport {
            module_dir: request.module_dir.clone(),
            backend: request.backend,
            written: artifacts.into_iter().map(|a| a.file_name).collect(),
            registration,
        })
    }

    /// Write an artifact set into a fresh directory.
    ///
    /// Precondition: `target_dir` must not exist — an existing directory is
    /// hand-edited territory and is never touched. There is no rollback: a
    /// failure mid-sequence leaves the files written so far for the operator
    /// to inspect, and the existence guard blocks a blind retry.
    pub fn materialize(&self, target_dir: &Path, artifacts: &[Artifact]) -> NestmodResult<()> {
        if self.filesystem.exists(target_dir) {
            return Err(ApplicationError::DirectoryExists {
                path: target_dir.to_path_buf(),
            }
            .into());
        }

        self.filesystem.create_dir_all(target_dir)?;

        for artifact in artifacts {
            let path = target_dir.join(&artifact.file_name);
            self.filesystem.write_file(&path, artifact.content.trim())?;
            debug!(file = %path.display(), "artifact written");
        }

        Ok(())
    }

    /// Idempotently register the module in the aggregator file.
    ///
    /// An absent aggregator is a legitimate [`PatchOutcome::Skipped`] — not
    /// every deployment has one. The file is rewritten only when the patch
    /// actually changed its content, so `AlreadyPresent` never touches disk.
    pub fn register(
        &self,
        aggregator_path: &Path,
        names: &ModuleNames,
    ) -> NestmodResult<PatchOutcome> {
        if !self.filesystem.exists(aggregator_path) {
            debug!(path = %aggregator_path.display(), "no aggregator file, skipping");
            return Ok(PatchOutcome::Skipped);
        }

        let source = self.filesystem.read_to_string(aggregator_path)?;
        let patched = aggregator::register_module(&source, names);

        if patched.content != source {
            self.filesystem.write_file(aggregator_path, &patched.content)?;
        }

        Ok(patched.outcome)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NestmodError;

    mockall::mock! {
        Fs {}

        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> NestmodResult<()>;
            fn write_file(&self, path: &Path, content: &str) -> NestmodResult<()>;
            fn read_to_string(&self, path: &Path) -> NestmodResult<String>;
            fn exists(&self, path: &Path) -> bool;
        }
    }

    fn media() -> ModuleNames {
        ModuleNames::derive("media").unwrap()
    }

    fn artifacts() -> Vec<Artifact> {
        templates::render_set(Backend::Prisma, &media()).unwrap()
    }

    #[test]
    fn materialize_refuses_existing_directory_without_writing() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let service = GenerateService::new(Box::new(fs));
        let err = service
            .materialize(Path::new("apps/api/src/media"), &artifacts())
            .unwrap_err();

        assert!(matches!(
            err,
            NestmodError::Application(ApplicationError::DirectoryExists { .. })
        ));
    }

    #[test]
    fn materialize_writes_every_artifact_trimmed() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file()
            .times(5)
            .withf(|path, content| {
                path.starts_with("apps/api/src/media")
                    && content.trim() == content
                    && !content.is_empty()
            })
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(fs));
        service
            .materialize(Path::new("apps/api/src/media"), &artifacts())
            .unwrap();
    }

    #[test]
    fn register_skips_absent_aggregator_without_touching_it() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_to_string().times(0);
        fs.expect_write_file().times(0);

        let service = GenerateService::new(Box::new(fs));
        let outcome = service
            .register(Path::new("apps/api/src/app.module.ts"), &media())
            .unwrap();

        assert_eq!(outcome, PatchOutcome::Skipped);
    }

    #[test]
    fn register_inserts_into_fresh_aggregator() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .times(1)
            .returning(|_| Ok("@Module({\n  imports: [],\n})\n".into()));
        fs.expect_write_file()
            .times(1)
            .withf(|_, content| content.contains("MediaModule"))
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(fs));
        let outcome = service
            .register(Path::new("apps/api/src/app.module.ts"), &media())
            .unwrap();

        assert_eq!(outcome, PatchOutcome::Inserted);
    }

    #[test]
    fn register_does_not_rewrite_an_already_patched_aggregator() {
        let already = "\
import { MediaModule } from './media/media.module';
@Module({
  imports: [
    MediaModule,
  ],
})
";
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .times(1)
            .returning(move |_| Ok(already.into()));
        fs.expect_write_file().times(0);

        let service = GenerateService::new(Box::new(fs));
        let outcome = service
            .register(Path::new("apps/api/src/app.module.ts"), &media())
            .unwrap();

        assert_eq!(outcome, PatchOutcome::AlreadyPresent);
    }

    #[test]
    fn generate_degrades_a_patch_failure_into_the_report() {
        let module_dir = PathBuf::from("apps/api/src/media");
        let aggregator = PathBuf::from("apps/api/src/app.module.ts");

        let mut fs = MockFs::new();
        fs.expect_exists()
            .withf(|p: &Path| p.ends_with("media"))
            .return_const(false);
        fs.expect_exists()
            .withf(|p: &Path| p.ends_with("app.module.ts"))
            .return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_read_to_string().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let service = GenerateService::new(Box::new(fs));
        let report = service
            .generate(&GenerateRequest {
                names: media(),
                backend: Backend::Prisma,
                module_dir,
                aggregator_path: aggregator,
            })
            .unwrap();

        assert_eq!(report.written.len(), 5);
        assert!(matches!(report.registration, Registration::Failed { .. }));
    }

    #[test]
    fn generate_reports_written_files_in_render_order() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(fs));
        let report = service
            .generate(&GenerateRequest {
                names: media(),
                backend: Backend::TypeOrm,
                module_dir: PathBuf::from("apps/api/src/media"),
                aggregator_path: PathBuf::from("apps/api/src/app.module.ts"),
            })
            .unwrap();

        assert_eq!(
            report.written,
            vec![
                "media.service.ts",
                "media.service.spec.ts",
                "media.controller.ts",
                "media.controller.spec.ts",
                "media.module.ts",
            ]
        );
        assert_eq!(
            report.registration,
            Registration::Outcome(PatchOutcome::Skipped)
        );
    }
}
