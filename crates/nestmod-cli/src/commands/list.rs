//! Implementation of the `nestmod list` command.

use nestmod_core::templates::TEMPLATE_REGISTRY;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Supported backends:")?;
            for set in TEMPLATE_REGISTRY {
                let kinds: Vec<&str> = set.artifacts.iter().map(|(k, _)| k.as_str()).collect();
                output.print(&format!(
                    "  {:<10} renders: {}",
                    set.backend,
                    kinds.join(", ")
                ))?;
            }
        }

        ListFormat::List => {
            for set in TEMPLATE_REGISTRY {
                println!("{}", set.backend);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let entries: Vec<serde_json::Value> = TEMPLATE_REGISTRY
                .iter()
                .map(|set| {
                    serde_json::json!({
                        "backend": set.backend,
                        "artifacts": set.artifacts.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
                    })
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
