//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!
//! - **Driving (Input) Ports**: the CLI calls `GenerationService` directly

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
