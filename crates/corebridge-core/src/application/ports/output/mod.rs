//! Driven (output) ports - implemented by infrastructure.
//!
//! The `corebridge-adapters` crate provides implementations.

use std::path::Path;

use crate::error::CoreBridgeResult;

/// Port for the filesystem write boundary.
///
/// Implemented by:
/// - `corebridge_adapters::filesystem::LocalFilesystem` (production)
/// - `corebridge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `write_file` overwrites unconditionally. Callers create the parent
/// directory first.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreBridgeResult<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> CoreBridgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
