//! Application layer for CoreBridge.
//!
//! This layer contains:
//! - **Plan**: the single per-run computation of names, routes and profiles
//! - **Generators**: pure package renderers
//! - **Services**: run orchestration (GenerationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod generators;
pub mod plan;
pub mod ports;
pub mod services;

pub use services::{GenerationReport, GenerationScope, GenerationService, PackageReport};

pub use plan::{AdapterTarget, GenerationPlan};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
