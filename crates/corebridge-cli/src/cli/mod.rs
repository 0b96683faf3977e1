//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{DEFAULT_CONFIG_FILE, GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "corebridge",
    bin_name = "corebridge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Extract platform-agnostic business logic. Generate contracts. Scaffold adapters.",
    long_about = "CoreBridge generates a framework-free core package, a contracts \
                  package (OpenAPI, JSON Schema, TypeScript DTOs) and one Express \
                  adapter package per target platform from a single config file.",
    after_help = "EXAMPLES:\n\
        \x20 corebridge init\n\
        \x20 corebridge generate\n\
        \x20 corebridge generate --contracts-only --out-dir ./build\n\
        \x20 corebridge completions bash > /usr/share/bash-completion/completions/corebridge",
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
    /// Write a default `corebridge.config.json`.
    #[command(
        about = "Initialize CoreBridge in your project",
        after_help = "EXAMPLES:\n\
            \x20 corebridge init\n\
            \x20 corebridge init --force   # overwrite an existing config"
    )]
    Init(InitArgs),

    /// Generate core, contracts, and adapter packages.
    #[command(
        visible_alias = "gen",
        about = "Generate core, contracts, and adapter packages",
        after_help = "EXAMPLES:\n\
            \x20 corebridge generate\n\
            \x20 corebridge generate --core-only\n\
            \x20 corebridge generate --contracts-only --adapters-only\n\
            \x20 corebridge generate -c config/corebridge.json --dry-run"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 corebridge completions bash > ~/.local/share/bash-completion/completions/corebridge\n\
            \x20 corebridge completions zsh  > ~/.zfunc/_corebridge\n\
            \x20 corebridge completions fish > ~/.config/fish/completions/corebridge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `corebridge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `corebridge generate`.
///
/// The three `--*-only` flags combine; passing none generates everything.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long = "core-only", help = "Generate the core package")]
    pub core_only: bool,

    #[arg(long = "contracts-only", help = "Generate the contracts package")]
    pub contracts_only: bool,

    #[arg(long = "adapters-only", help = "Generate the adapter packages")]
    pub adapters_only: bool,

    /// Output directory; overrides `outputDir` from the config file.
    #[arg(
        short = 'o',
        long = "out-dir",
        value_name = "DIR",
        env = "COREBRIDGE_OUTPUT_DIR",
        help = "Output directory (overrides outputDir)"
    )]
    pub out_dir: Option<PathBuf>,

    /// List the files that would be written without writing them.
    #[arg(long = "dry-run", help = "Show what would be generated")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `corebridge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Shells supported by `clap_complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
