//! Implementation of the `nestmod generate` command.
//!
//! Responsibility: translate CLI arguments into a `GenerateRequest`, call the
//! core generate service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use nestmod_adapters::LocalFilesystem;
use nestmod_core::{
    aggregator::PatchOutcome,
    application::{GenerateRequest, GenerateService, Registration},
    domain::{ArtifactKind, Backend, ModuleNames},
};

use crate::{
    cli::{BackendArg, GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `nestmod generate` command.
///
/// Dispatch sequence:
/// 1. Derive the naming variants (validates the raw name)
/// 2. Resolve the backend: flag, then config default, then Prisma
/// 3. Resolve the module directory and aggregator path
/// 4. Early-exit if `--dry-run`
/// 5. Execute generation via `GenerateService`
/// 6. Report per-artifact results and the registration outcome
#[instrument(skip_all, fields(module = %args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Derive names
    let names = ModuleNames::derive(&args.name).map_err(|e| CliError::Core(e.into()))?;

    // 2. Resolve backend
    let backend = resolve_backend(args.backend, &config)?;

    // 3. Resolve paths
    let (module_dir, aggregator_path) = resolve_paths(&args, &config, names.kebab());

    debug!(
        module = %names,
        backend = %backend,
        module_dir = %module_dir.display(),
        aggregator = %aggregator_path.display(),
        "Generation target resolved"
    );

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            names,
            module_dir.display(),
        ))?;
        for kind in ArtifactKind::ALL {
            output.info(&format!("  {}", kind.file_name(names.kebab())))?;
        }
        output.info(&format!(
            "  register {}Module in {}",
            names.pascal(),
            aggregator_path.display(),
        ))?;
        return Ok(());
    }

    // 5. Generate
    let service = GenerateService::new(Box::new(LocalFilesystem::new()));

    output.header(&format!("Generating '{names}' module..."))?;
    info!(module = %names, path = %module_dir.display(), "Generation started");

    let report = service
        .generate(&GenerateRequest {
            names: names.clone(),
            backend,
            module_dir: module_dir.clone(),
            aggregator_path: aggregator_path.clone(),
        })
        .map_err(CliError::Core)?;

    info!(module = %names, "Generation completed");

    // 6. Per-artifact lines + registration outcome + summary
    for file in &report.written {
        output.success(&format!("[{}] {}", report.backend, file))?;
    }

    report_registration(&report.registration, &names, &aggregator_path, &output)?;

    output.success(&format!(
        "Module '{}' created ({} files)",
        names,
        report.written.len()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  implement {} and run the spec stubs",
            module_dir.join(ArtifactKind::Service.file_name(names.kebab())).display()
        ))?;
    }

    Ok(())
}

// ── Resolution helpers ────────────────────────────────────────────────────────

/// Backend precedence: `--backend` flag, then `defaults.backend` from config,
/// then Prisma.
fn resolve_backend(flag: Option<BackendArg>, config: &AppConfig) -> CliResult<Backend> {
    if let Some(arg) = flag {
        return Ok(convert_backend(arg));
    }

    match &config.defaults.backend {
        Some(raw) => raw.parse::<Backend>().map_err(|e| CliError::ConfigError {
            message: format!("defaults.backend: {e}"),
            source: None,
        }),
        None => Ok(Backend::default()),
    }
}

/// Module directory and aggregator path for one run.
///
/// `--app-module` wins outright; otherwise a custom `--root` moves the
/// aggregator along with it (`<root>/app.module.ts`), and with neither flag
/// both come from config.
fn resolve_paths(args: &GenerateArgs, config: &AppConfig, kebab: &str) -> (PathBuf, PathBuf) {
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| config.paths.source_root.clone());
    let module_dir = root.join(kebab);

    let aggregator_path = match (&args.app_module, &args.root) {
        (Some(path), _) => path.clone(),
        (None, Some(root)) => root.join("app.module.ts"),
        (None, None) => config.paths.app_module.clone(),
    };

    (module_dir, aggregator_path)
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_backend(arg: BackendArg) -> Backend {
    match arg {
        BackendArg::Prisma => Backend::Prisma,
        BackendArg::TypeOrm => Backend::TypeOrm,
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

/// Render the registration step's outcome.
///
/// Only `Inserted` is a success line. Everything else is informational or a
/// warning — never an error, because the artifacts are already safely on
/// disk when the patcher runs.
fn report_registration(
    registration: &Registration,
    names: &ModuleNames,
    aggregator_path: &std::path::Path,
    out: &OutputManager,
) -> CliResult<()> {
    match registration {
        Registration::Outcome(PatchOutcome::Inserted) => out.success(&format!(
            "[auto-import] {}Module registered in {}",
            names.pascal(),
            aggregator_path.display(),
        ))?,
        Registration::Outcome(PatchOutcome::AlreadyPresent) => out.info(&format!(
            "[auto-import] {}Module already registered",
            names.pascal(),
        ))?,
        Registration::Outcome(PatchOutcome::Skipped) => out.info(&format!(
            "[auto-import] {} not found, registration skipped",
            aggregator_path.display(),
        ))?,
        Registration::Outcome(PatchOutcome::ListNotFound) => out.warning(&format!(
            "[auto-import] no 'imports: [...]' list found in {}; add {}Module to it manually",
            aggregator_path.display(),
            names.pascal(),
        ))?,
        Registration::Failed { reason } => out.warning(&format!(
            "[auto-import] could not update {}: {}; add {}Module to it manually",
            aggregator_path.display(),
            reason,
            names.pascal(),
        ))?,
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
