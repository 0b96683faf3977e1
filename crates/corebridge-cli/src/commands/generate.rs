//! `corebridge generate` — render and write the selected packages.
//!
//! Responsibility: translate CLI arguments into a `ProjectConfig` and a
//! `GenerationScope`, call the core generation service, and display results.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use corebridge_adapters::LocalFilesystem;
use corebridge_core::domain::capitalize;
use corebridge_core::prelude::*;

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::CoreBridgeConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// One package in the `--output-format json` summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageSummary {
    package: String,
    directory: PathBuf,
    files: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateSummary {
    dry_run: bool,
    output_dir: PathBuf,
    packages: Vec<PackageSummary>,
}

/// Execute the `corebridge generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the output directory (`--out-dir` beats `outputDir`)
/// 2. Render every selected package in memory
/// 3. Early-exit with a file listing if `--dry-run`
/// 4. Write each package, one spinner per package (`-v` lists its files)
/// 5. Print the summary and next steps
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: CoreBridgeConfig,
    output: OutputManager,
) -> CliResult<()> {
    let output_dir = resolve_output_dir(&args, &config)?;
    let scope = GenerationScope::from_flags(args.core_only, args.contracts_only, args.adapters_only);
    let project = config.to_project_config();

    debug!(
        output_dir = %output_dir.display(),
        core = scope.core,
        contracts = scope.contracts,
        adapters = scope.adapters,
        "Scope resolved"
    );

    if scope.contracts && project.contracts.format == ContractFormat::Graphql {
        output.warning("GraphQL contracts are not supported yet; emitting OpenAPI instead")?;
    }

    let spinner = output.spinner("Rendering packages...");
    let rendered = GenerationService::render(&project, scope);
    spinner.finish_and_clear();
    let sets = rendered.with_cli_context(|| "rendering packages")?;

    if args.dry_run {
        return report_dry_run(&sets, &output_dir, &output);
    }

    let service = GenerationService::new(Box::new(LocalFilesystem::new()));
    service
        .prepare_output(&output_dir)
        .with_cli_context(|| format!("preparing {}", output_dir.display()))?;

    let mut report = GenerationReport::default();
    for set in &sets {
        let label = package_label(set.package());
        let spinner = output.spinner(format!("Generating {label}..."));
        let written = service.write_package(&output_dir, set);
        spinner.finish_and_clear();

        let written = written.with_cli_context(|| format!("writing {label}"))?;
        output.success(&format!("{} generated", capitalize(&label)))?;
        if global.verbose > 0 {
            for file in summarize(set, &written.directory).files {
                output.bullet(&file.display().to_string())?;
            }
        }
        report.packages.push(written);
    }

    info!(
        packages = report.packages.len(),
        files = report.total_files(),
        "Generation complete"
    );

    output.json(&GenerateSummary {
        dry_run: false,
        output_dir: output_dir.clone(),
        packages: sets
            .iter()
            .zip(&report.packages)
            .map(|(set, written)| summarize(set, &written.directory))
            .collect(),
    })?;

    output.print("")?;
    output.success("Generation complete!")?;
    output.print("")?;
    output.header("Generated packages:")?;
    for directory in report.directories() {
        output.bullet(&directory.display().to_string())?;
    }
    output.print("")?;
    output.header("Next steps:")?;
    output.print(&format!(
        "  1. Review generated code in {}/",
        output_dir.display()
    ))?;
    output.print("  2. Implement the repository interfaces from the core package")?;
    output.print("  3. Wire up adapters to your HTTP server")?;
    output.print("")?;

    Ok(())
}

/// `--out-dir` (or `COREBRIDGE_OUTPUT_DIR`) wins over the config file.
fn resolve_output_dir(args: &GenerateArgs, config: &CoreBridgeConfig) -> CliResult<PathBuf> {
    let dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());

    if dir.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("output directory '{}' is a file", dir.display()),
            source: None,
        });
    }
    Ok(dir)
}

fn report_dry_run(sets: &[ArtifactSet], output_dir: &Path, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would write {} files under {}",
        sets.iter().map(ArtifactSet::len).sum::<usize>(),
        output_dir.display()
    ))?;

    let mut packages = Vec::with_capacity(sets.len());
    for set in sets {
        let directory = output_dir.join(set.package().directory_name());
        let summary = summarize(set, &directory);

        output.print("")?;
        output.header(&format!("{} ({} files)", package_label(set.package()), set.len()))?;
        for file in &summary.files {
            output.bullet(&file.display().to_string())?;
        }
        packages.push(summary);
    }

    output.json(&GenerateSummary {
        dry_run: true,
        output_dir: output_dir.to_path_buf(),
        packages,
    })?;
    Ok(())
}

fn summarize(set: &ArtifactSet, directory: &Path) -> PackageSummary {
    PackageSummary {
        package: set.package().npm_name(),
        directory: directory.to_path_buf(),
        files: set
            .iter()
            .map(|artifact| artifact.path.to_path_under(directory))
            .collect(),
    }
}

fn package_label(package: &PackageKind) -> String {
    match package {
        PackageKind::Core => "core package".into(),
        PackageKind::Contracts => "contracts package".into(),
        PackageKind::Adapter(id) => format!("{id} adapter"),
    }
}
