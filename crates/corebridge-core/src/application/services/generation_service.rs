//! Generation Service - main application orchestrator.
//!
//! This service coordinates a generation run:
//! 1. Compute the generation plan once
//! 2. Render the selected packages (pure)
//! 3. Write each package: directory first, then every file, overwriting
//!
//! The first write failure stops the run. Files already written stay on
//! disk; regeneration replaces generated files wholesale.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        generators::{adapter_package, contracts_package, core_package},
        plan::GenerationPlan,
        ports::Filesystem,
    },
    domain::{ArtifactSet, PackageKind, ProjectConfig},
    error::CoreBridgeResult,
};

/// Which package families a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationScope {
    pub core: bool,
    pub contracts: bool,
    pub adapters: bool,
}

impl GenerationScope {
    pub const fn all() -> Self {
        Self {
            core: true,
            contracts: true,
            adapters: true,
        }
    }

    /// Build a scope from `--*-only` flags.
    ///
    /// No flag selects everything; several flags combine.
    pub const fn from_flags(core_only: bool, contracts_only: bool, adapters_only: bool) -> Self {
        if !core_only && !contracts_only && !adapters_only {
            return Self::all();
        }
        Self {
            core: core_only,
            contracts: contracts_only,
            adapters: adapters_only,
        }
    }

    pub fn includes(&self, package: &PackageKind) -> bool {
        match package {
            PackageKind::Core => self.core,
            PackageKind::Contracts => self.contracts,
            PackageKind::Adapter(_) => self.adapters,
        }
    }
}

impl Default for GenerationScope {
    fn default() -> Self {
        Self::all()
    }
}

/// What was written for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub package: PackageKind,
    pub directory: PathBuf,
    pub files: usize,
    pub bytes: usize,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub packages: Vec<PackageReport>,
}

impl GenerationReport {
    pub fn total_files(&self) -> usize {
        self.packages.iter().map(|p| p.files).sum()
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.packages.iter().map(|p| p.directory.as_path())
    }
}

/// Main generation service.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerationService {
    /// Create a new generation service writing through `filesystem`.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render the selected packages without touching the filesystem.
    ///
    /// Order is core, contracts, then one adapter per configured id.
    #[instrument(skip_all, fields(domains = config.domains.len(), adapters = config.adapters.len()))]
    pub fn render(
        config: &ProjectConfig,
        scope: GenerationScope,
    ) -> CoreBridgeResult<Vec<ArtifactSet>> {
        let plan = GenerationPlan::new(config);
        let mut sets = Vec::new();

        if scope.core {
            sets.push(core_package::generate(&plan)?);
        }
        if scope.contracts {
            sets.push(contracts_package::generate(&plan)?);
        }
        if scope.adapters {
            for target in plan.adapters() {
                sets.push(adapter_package::generate(&plan, target)?);
            }
        }

        debug!(packages = sets.len(), "Packages rendered");
        Ok(sets)
    }

    /// Render and write the selected packages under `output_dir`.
    #[instrument(skip_all, fields(output_dir = %output_dir.display()))]
    pub fn generate(
        &self,
        config: &ProjectConfig,
        output_dir: &Path,
        scope: GenerationScope,
    ) -> CoreBridgeResult<GenerationReport> {
        let sets = Self::render(config, scope)?;
        self.prepare_output(output_dir)?;

        let mut report = GenerationReport::default();
        for set in &sets {
            report.packages.push(self.write_package(output_dir, set)?);
        }

        info!(
            packages = report.packages.len(),
            files = report.total_files(),
            "Generation completed"
        );
        Ok(report)
    }

    /// Ensure the output root exists.
    pub fn prepare_output(&self, output_dir: &Path) -> CoreBridgeResult<()> {
        self.filesystem.create_dir_all(output_dir)
    }

    /// Write one package under `output_dir/<package dir>`.
    #[instrument(skip_all, fields(package = %set.package()))]
    pub fn write_package(&self, output_dir: &Path, set: &ArtifactSet) -> CoreBridgeResult<PackageReport> {
        let directory = output_dir.join(set.package().directory_name());
        self.filesystem.create_dir_all(&directory)?;

        for artifact in set {
            let path = artifact.path.to_path_under(&directory);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &artifact.content)?;
        }

        debug!(files = set.len(), directory = %directory.display(), "Package written");
        Ok(PackageReport {
            package: set.package().clone(),
            directory,
            files: set.len(),
            bytes: set.total_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::error::CoreBridgeError;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Mkdir(PathBuf),
        Write(PathBuf),
    }

    /// Records every call in order.
    #[derive(Clone, Default)]
    struct RecordingFilesystem {
        ops: Arc<Mutex<Vec<Op>>>,
    }

    impl Filesystem for RecordingFilesystem {
        fn create_dir_all(&self, path: &Path) -> CoreBridgeResult<()> {
            self.ops.lock().unwrap().push(Op::Mkdir(path.to_path_buf()));
            Ok(())
        }

        fn write_file(&self, path: &Path, _content: &str) -> CoreBridgeResult<()> {
            self.ops.lock().unwrap().push(Op::Write(path.to_path_buf()));
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    fn io_error(path: &Path) -> CoreBridgeError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "disk full".into(),
        }
        .into()
    }

    #[test]
    fn scope_flags() {
        assert_eq!(GenerationScope::from_flags(false, false, false), GenerationScope::all());

        let core = GenerationScope::from_flags(true, false, false);
        assert!(core.includes(&PackageKind::Core));
        assert!(!core.includes(&PackageKind::Contracts));
        assert!(!core.includes(&PackageKind::Adapter("web".into())));

        let both = GenerationScope::from_flags(false, true, true);
        assert!(!both.core && both.contracts && both.adapters);
    }

    #[test]
    fn render_orders_packages() {
        let sets = GenerationService::render(&ProjectConfig::default(), GenerationScope::all()).unwrap();
        let dirs: Vec<String> = sets.iter().map(|s| s.package().directory_name()).collect();
        assert_eq!(dirs, ["core", "contracts", "adapter-web", "adapter-mobile"]);
    }

    #[test]
    fn render_respects_scope() {
        let sets = GenerationService::render(
            &ProjectConfig::default(),
            GenerationScope::from_flags(false, false, true),
        )
        .unwrap();
        assert_eq!(sets.len(), 2);
        assert!(sets.iter().all(|s| matches!(s.package(), PackageKind::Adapter(_))));
    }

    #[test]
    fn directories_precede_writes() {
        let fs = RecordingFilesystem::default();
        let service = GenerationService::new(Box::new(fs.clone()));
        let out = Path::new("/out");

        let report = service
            .generate(&ProjectConfig::default(), out, GenerationScope::all())
            .unwrap();

        let ops = fs.ops.lock().unwrap();
        assert_eq!(ops[0], Op::Mkdir(out.to_path_buf()));

        let mut created: Vec<PathBuf> = Vec::new();
        for op in ops.iter() {
            match op {
                Op::Mkdir(p) => created.push(p.clone()),
                Op::Write(p) => {
                    let parent = p.parent().unwrap();
                    assert!(created.iter().any(|d| d == parent), "{} written before its directory", p.display());
                }
            }
        }

        let writes = ops.iter().filter(|op| matches!(op, Op::Write(_))).count();
        assert_eq!(writes, report.total_files());
        assert_eq!(
            report.directories().collect::<Vec<_>>(),
            [
                Path::new("/out/core"),
                Path::new("/out/contracts"),
                Path::new("/out/adapter-web"),
                Path::new("/out/adapter-mobile"),
            ]
        );
    }

    #[test]
    fn first_write_failure_stops_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .times(1)
            .returning(|path, _| Err(io_error(path)));

        let service = GenerationService::new(Box::new(fs));
        let err = service
            .generate(&ProjectConfig::default(), Path::new("/out"), GenerationScope::all())
            .unwrap_err();

        assert!(matches!(
            err,
            CoreBridgeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn unwritable_output_root_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .times(1)
            .returning(|path| Err(io_error(path)));
        fs.expect_write_file().never();

        let service = GenerationService::new(Box::new(fs));
        assert!(
            service
                .generate(&ProjectConfig::default(), Path::new("/ro"), GenerationScope::all())
                .is_err()
        );
    }

    #[test]
    fn write_package_reports_counts() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let set = ArtifactSet::new(PackageKind::Adapter("web".into()))
            .with("a.ts", "abc")
            .with("src/b.ts", "de");
        let service = GenerationService::new(Box::new(fs));
        let report = service.write_package(Path::new("/out"), &set).unwrap();

        assert_eq!(report.directory, PathBuf::from("/out/adapter-web"));
        assert_eq!(report.files, 2);
        assert_eq!(report.bytes, 5);
    }
}
