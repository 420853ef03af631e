//! Integration tests for nestmod-adapters.
//!
//! The full generate workflow runs against `MemoryFilesystem`; one pass runs
//! against `LocalFilesystem` in a tempdir to prove the std::fs adapter
//! behaves the same.

use std::path::{Path, PathBuf};

use nestmod_adapters::{LocalFilesystem, MemoryFilesystem};
use nestmod_core::{
    aggregator::PatchOutcome,
    application::{ApplicationError, GenerateRequest, GenerateService, Registration},
    domain::{Backend, ModuleNames},
    error::NestmodError,
};

const APP_MODULE: &str = "\
import { Module } from '@nestjs/common';
import { UserModule } from './user/user.module';

@Module({
  imports: [
    UserModule,
  ],
  controllers: [],
  providers: [],
})
export class AppModule {}
";

fn request(root: &Path, raw: &str, backend: Backend) -> GenerateRequest {
    let names = ModuleNames::derive(raw).unwrap();
    GenerateRequest {
        module_dir: root.join(names.kebab()),
        aggregator_path: root.join("app.module.ts"),
        names,
        backend,
    }
}

// ── MemoryFilesystem workflow ────────────────────────────────────────────────

#[test]
fn full_workflow_writes_artifacts_and_patches_aggregator() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("apps/api/src/app.module.ts", APP_MODULE);

    let service = GenerateService::new(Box::new(fs.clone()));
    let report = service
        .generate(&request(Path::new("apps/api/src"), "media", Backend::Prisma))
        .unwrap();

    assert_eq!(report.written.len(), 5);
    assert_eq!(
        report.registration,
        Registration::Outcome(PatchOutcome::Inserted)
    );

    let service_ts = fs
        .read_file(Path::new("apps/api/src/media/media.service.ts"))
        .expect("service artifact written");
    assert!(service_ts.contains("export class MediaService"));
    // Content is trimmed before writing.
    assert_eq!(service_ts.trim(), service_ts);

    let app_module = fs
        .read_file(Path::new("apps/api/src/app.module.ts"))
        .unwrap();
    assert!(app_module.starts_with("import { MediaModule } from './media/media.module';"));
    assert!(app_module.contains("\n    MediaModule,"));
    assert!(app_module.contains("UserModule,"));
}

#[test]
fn regenerating_into_an_existing_directory_is_refused() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("apps/api/src/app.module.ts", APP_MODULE);

    let service = GenerateService::new(Box::new(fs.clone()));
    let req = request(Path::new("apps/api/src"), "media", Backend::Prisma);

    service.generate(&req).unwrap();
    let before = fs.read_file(Path::new("apps/api/src/app.module.ts")).unwrap();
    let files_before = fs.list_files().len();

    let err = service.generate(&req).unwrap_err();
    assert!(matches!(
        err,
        NestmodError::Application(ApplicationError::DirectoryExists { .. })
    ));

    // Nothing was created or rewritten by the refused run.
    assert_eq!(fs.list_files().len(), files_before);
    assert_eq!(
        fs.read_file(Path::new("apps/api/src/app.module.ts")).unwrap(),
        before
    );
}

#[test]
fn absent_aggregator_is_skipped_and_untouched() {
    let fs = MemoryFilesystem::new();

    let service = GenerateService::new(Box::new(fs.clone()));
    let report = service
        .generate(&request(Path::new("apps/api/src"), "media", Backend::TypeOrm))
        .unwrap();

    assert_eq!(
        report.registration,
        Registration::Outcome(PatchOutcome::Skipped)
    );
    assert!(
        !fs.list_files()
            .iter()
            .any(|p| p.ends_with("app.module.ts"))
    );
}

#[test]
fn registering_twice_is_idempotent_through_the_service() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("apps/api/src/app.module.ts", APP_MODULE);

    let names = ModuleNames::derive("MediaUser").unwrap();
    let aggregator = PathBuf::from("apps/api/src/app.module.ts");
    let service = GenerateService::new(Box::new(fs.clone()));

    let first = service.register(&aggregator, &names).unwrap();
    let after_first = fs.read_file(&aggregator).unwrap();

    let second = service.register(&aggregator, &names).unwrap();
    let after_second = fs.read_file(&aggregator).unwrap();

    assert_eq!(first, PatchOutcome::Inserted);
    assert_eq!(second, PatchOutcome::AlreadyPresent);
    assert_eq!(after_first, after_second);
}

#[test]
fn aggregator_without_imports_list_surfaces_list_not_found() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("apps/api/src/app.module.ts", "export class AppModule {}\n");

    let names = ModuleNames::derive("media").unwrap();
    let service = GenerateService::new(Box::new(fs.clone()));
    let outcome = service
        .register(Path::new("apps/api/src/app.module.ts"), &names)
        .unwrap();

    assert_eq!(outcome, PatchOutcome::ListNotFound);
    // The import was still prepended.
    let content = fs.read_file(Path::new("apps/api/src/app.module.ts")).unwrap();
    assert!(content.starts_with("import { MediaModule }"));
}

#[test]
fn memory_filesystem_rejects_writes_into_missing_parents() {
    let fs = MemoryFilesystem::new();
    use nestmod_core::application::ports::Filesystem;

    let err = fs
        .write_file(Path::new("no/such/dir/file.ts"), "x")
        .unwrap_err();
    assert!(matches!(
        err,
        NestmodError::Application(ApplicationError::FilesystemError { .. })
    ));
}

// ── LocalFilesystem (real disk) ──────────────────────────────────────────────

#[test]
fn local_filesystem_end_to_end() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("apps/api/src");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("app.module.ts"), APP_MODULE).unwrap();

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let report = service
        .generate(&request(&root, "invoiceLine", Backend::TypeOrm))
        .unwrap();

    assert_eq!(
        report.registration,
        Registration::Outcome(PatchOutcome::Inserted)
    );

    let module_dir = root.join("invoice-line");
    for file in [
        "invoice-line.service.ts",
        "invoice-line.service.spec.ts",
        "invoice-line.controller.ts",
        "invoice-line.controller.spec.ts",
        "invoice-line.module.ts",
    ] {
        assert!(module_dir.join(file).is_file(), "missing {file}");
    }

    let app_module = std::fs::read_to_string(root.join("app.module.ts")).unwrap();
    assert!(
        app_module
            .starts_with("import { InvoiceLineModule } from './invoice-line/invoice-line.module';")
    );
    assert!(app_module.contains("\n    InvoiceLineModule,"));
}
