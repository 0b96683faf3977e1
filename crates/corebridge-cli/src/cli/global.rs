//! Flags accepted by every subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "corebridge.config.json";

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Log more (-v info, -vv debug, -vvv every file written)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    /// Plain output without ANSI codes; `NO_COLOR` sets it too.
    #[arg(long = "no-color", global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new(), help = "Disable colored output")]
    pub no_color: bool,

    /// Config file consumed by `generate` and written by `init`.
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILE,
        help = "Path to corebridge.config.json"
    )]
    pub config: PathBuf,

    /// `json` prints one machine-readable summary on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colours, glyphs and spinners.
    Human,
    /// No colours and no spinners.
    Plain,
    /// A single JSON summary on stdout.
    Json,
}
