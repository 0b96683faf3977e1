//! `corebridge init` — write a default `corebridge.config.json`.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::CoreBridgeConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create the configuration file at the `--config` path.
#[instrument(skip_all, fields(path = %global.config.display()))]
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let spinner = output.spinner("Initializing CoreBridge...");
    let written = write_config(&global.config, args.force);
    spinner.finish_and_clear();
    written?;

    info!(path = %global.config.display(), "Config written");
    output.success("CoreBridge initialized successfully!")?;
    output.json(&serde_json::json!({ "created": global.config }))?;

    output.print("")?;
    output.header("Created:")?;
    output.bullet(&global.config.display().to_string())?;
    output.print("")?;
    output.header("Next steps:")?;
    output.print(&format!(
        "  1. Edit {} to match your project structure",
        global.config.display()
    ))?;
    output.print("  2. Run 'corebridge generate' to create packages")?;
    output.print("")?;

    Ok(())
}

/// Write [`CoreBridgeConfig::initial`] to `path`, refusing to overwrite an
/// existing file unless `force` is set.
fn write_config(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let json = CoreBridgeConfig::initial().to_json()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    std::fs::write(path, json)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
