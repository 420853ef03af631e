//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nestmod",
    bin_name = "nestmod",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} NestJS module scaffolding with automatic registration",
    long_about = "Nestmod generates a NestJS feature module (service, \
                  controller, module, and test stubs) and registers it in \
                  app.module.ts.",
    after_help = "EXAMPLES:\n\
        \x20 nestmod generate media\n\
        \x20 nestmod generate MediaUser --backend typeorm\n\
        \x20 nestmod list\n\
        \x20 nestmod completions bash > /usr/share/bash-completion/completions/nestmod",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new feature module.
    #[command(
        visible_alias = "g",
        about = "Generate a new feature module",
        after_help = "EXAMPLES:\n\
            \x20 nestmod generate media\n\
            \x20 nestmod generate MediaUser --backend typeorm\n\
            \x20 nestmod generate invoice --root apps/billing/src --dry-run"
    )]
    Generate(GenerateArgs),

    /// List supported backends.
    #[command(
        visible_alias = "ls",
        about = "List supported backends",
        after_help = "EXAMPLES:\n\
            \x20 nestmod list\n\
            \x20 nestmod list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 nestmod completions bash > ~/.local/share/bash-completion/completions/nestmod\n\
            \x20 nestmod completions zsh  > ~/.zfunc/_nestmod\n\
            \x20 nestmod completions fish > ~/.config/fish/completions/nestmod.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `nestmod generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Raw module name: one word (`media`) or a pre-cased compound
    /// (`MediaUser`).  All casing variants are derived from it.
    #[arg(value_name = "NAME", help = "Module name (e.g. media, MediaUser)")]
    pub name: String,

    /// Persistence backend deciding the rendered bodies.
    #[arg(
        short = 'b',
        long = "backend",
        value_name = "BACKEND",
        value_enum,
        help = "Persistence backend (default: prisma, or defaults.backend from config)"
    )]
    pub backend: Option<BackendArg>,

    /// Override the API source root the module directory is created under.
    #[arg(
        long = "root",
        value_name = "DIR",
        help = "API source root (default: apps/api/src)"
    )]
    pub root: Option<PathBuf>,

    /// Override the aggregator file to register the module in.
    #[arg(
        long = "app-module",
        value_name = "FILE",
        help = "Aggregator file (default: <root>/app.module.ts)"
    )]
    pub app_module: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `nestmod list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `nestmod completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported persistence backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BackendArg {
    Prisma,
    /// Also accepted as `type-orm`.
    #[value(alias = "type-orm")]
    TypeOrm,
}

impl std::fmt::Display for BackendArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prisma => write!(f, "prisma"),
            Self::TypeOrm => write!(f, "typeorm"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn backend_display() {
        assert_eq!(BackendArg::Prisma.to_string(), "prisma");
        assert_eq!(BackendArg::TypeOrm.to_string(), "typeorm");
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["nestmod", "generate", "media", "--backend", "prisma"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["nestmod", "g", "media"]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.name, "media");
            assert_eq!(args.backend, None);
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn typeorm_alias() {
        let cli = Cli::parse_from(["nestmod", "generate", "media", "-b", "type-orm"]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.backend, Some(BackendArg::TypeOrm));
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn missing_name_is_a_parse_error() {
        assert!(Cli::try_parse_from(["nestmod", "generate"]).is_err());
    }

    #[test]
    fn unknown_backend_is_a_parse_error() {
        assert!(Cli::try_parse_from(["nestmod", "generate", "media", "-b", "mongoose"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["nestmod", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
