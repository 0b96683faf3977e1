//! CoreBridge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the CoreBridge
//! package generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         corebridge-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, GenerationPlan,    │
//! │   core/contracts/adapter generators)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   corebridge-adapters (Infrastructure)  │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (naming, routes, schema, policy)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use corebridge_core::prelude::*;
//! # use std::path::Path;
//! # struct Discard;
//! # impl Filesystem for Discard {
//! #     fn create_dir_all(&self, _: &Path) -> CoreBridgeResult<()> { Ok(()) }
//! #     fn write_file(&self, _: &Path, _: &str) -> CoreBridgeResult<()> { Ok(()) }
//! #     fn exists(&self, _: &Path) -> bool { false }
//! # }
//! # let filesystem: Box<dyn Filesystem> = Box::new(Discard);
//!
//! let config = ProjectConfig::new(["user", "project"], ["web", "mobile"]);
//!
//! // Dry run: nothing touches the filesystem
//! let packages = GenerationService::render(&config, GenerationScope::all()).unwrap();
//!
//! // Real run, with an injected filesystem adapter
//! let service = GenerationService::new(filesystem);
//! service.generate(&config, "./packages".as_ref(), GenerationScope::all()).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationPlan, GenerationReport, GenerationScope, GenerationService, PackageReport,
        ports::Filesystem,
    };
    pub use crate::domain::{
        ArtifactSet, ContractFormat, ContractSettings, PackageKind, ProjectConfig,
    };
    pub use crate::error::{CoreBridgeError, CoreBridgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
