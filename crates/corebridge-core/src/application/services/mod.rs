//! Application services - orchestrate use cases.

pub mod generation_service;

pub use generation_service::{GenerationReport, GenerationScope, GenerationService, PackageReport};
