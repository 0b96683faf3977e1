//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and render results.
//! No generation logic lives here.

pub mod completions;
pub mod generate;
pub mod init;
