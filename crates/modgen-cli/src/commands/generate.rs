//! `modgen generate`: load documents and write the four fragments.

use tracing::{info, instrument};

use modgen_adapters::{JsonSpecLoader, LocalFilesystem};
use modgen_core::prelude::*;

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Generate the ModuleLoader fragments.
#[instrument(skip_all, fields(documents = args.files.len(), dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = resolve_options(&args, &config);
    let loader = JsonSpecLoader::new(super::documents(args.files, &config));

    info!(
        documents = ?loader.paths(),
        ipp_prefix = %options.ipp_prefix,
        hpp_prefix = %options.hpp_prefix,
        unknown_module = %options.unknown_module,
        "Generating ModuleLoader fragments"
    );

    let spec = loader.load()?;

    if args.dry_run {
        return preview(&spec, &options, &output);
    }

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let report = service.generate(&spec, &options)?;

    for written in &report.artifacts {
        output.print(&format!(
            "  {} ({} bytes)",
            written.path.display(),
            written.bytes
        ))?;
    }
    output.success(&format!(
        "Generated {} fragments for {} interfaces and {} implementations",
        report.artifacts.len(),
        report.interfaces,
        report.implementations,
    ))?;

    Ok(())
}

/// Print every fragment to stdout instead of writing it.
fn preview(spec: &Specification, options: &GenerationOptions, output: &OutputManager) -> CliResult<()> {
    for artifact in render_all(spec, options)? {
        let path = artifact.kind.path_with_prefix(&options.ipp_prefix);
        output.raw(&format!("// ==> {} <==\n", path.display()))?;
        output.raw(&artifact.content)?;
    }
    output.info("Dry run: no files were written")?;
    Ok(())
}

/// Config values overridden by whatever the user passed explicitly.
fn resolve_options(args: &GenerateArgs, config: &AppConfig) -> GenerationOptions {
    let mut options = config.generation_options();

    if let Some(prefix) = &args.ipp_prefix {
        options.ipp_prefix = prefix.clone();
    }
    if let Some(prefix) = &args.hpp_prefix {
        options.hpp_prefix = prefix.clone();
    }
    if args.strict_modules {
        options.unknown_module = UnknownModulePolicy::Report;
    } else if args.no_strict_modules {
        options.unknown_module = UnknownModulePolicy::Ignore;
    }

    options
}
