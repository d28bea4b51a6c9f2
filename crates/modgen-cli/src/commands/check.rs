//! `modgen check`: load and validate documents, then summarise them.

use tracing::instrument;

use modgen_adapters::JsonSpecLoader;
use modgen_core::prelude::*;

use crate::{
    cli::{CheckArgs, CheckFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(documents = args.files.len()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let loader = JsonSpecLoader::new(super::documents(args.files, &config));
    let spec = loader.load()?;

    match args.format {
        CheckFormat::Table => {
            output.header(&format!("Interfaces ({}):", spec.len()))?;
            output.raw(&table(&spec))?;
            output.success(&format!(
                "{} interfaces, {} implementations",
                spec.len(),
                spec.implementation_count()
            ))?;
        }
        CheckFormat::List => output.raw(&pairs(&spec))?,
        CheckFormat::Json => {
            let json = serde_json::to_string_pretty(&spec).map_err(|e| {
                CliError::Core(ModgenError::Internal {
                    message: format!("failed to serialise specification: {e}"),
                })
            })?;
            output.raw(&json)?;
            output.raw("\n")?;
        }
    }

    Ok(())
}

/// Interface names padded to a column, followed by implementation count.
fn table(spec: &Specification) -> String {
    let width = spec
        .interfaces()
        .iter()
        .map(|r| r.name.as_str().len())
        .max()
        .unwrap_or(0);

    spec.interfaces()
        .iter()
        .map(|record| {
            let count = record.implementations.len();
            let noun = if count == 1 { "implementation" } else { "implementations" };
            format!("  {:<width$}  {count} {noun}\n", record.name.as_str())
        })
        .collect()
}

/// `Interface Implementation` per line, the same pairs the Names table holds.
fn pairs(spec: &Specification) -> String {
    spec.interfaces()
        .iter()
        .flat_map(|record| {
            record
                .implementations
                .iter()
                .map(move |implementation| format!("{} {}\n", record.name, implementation))
        })
        .collect()
}
