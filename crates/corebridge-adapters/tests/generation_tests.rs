//! Generation runs through the real filesystem adapters.

use std::path::Path;

use corebridge_adapters::{LocalFilesystem, MemoryFilesystem};
use corebridge_core::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

#[test]
fn writes_all_packages_to_disk() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("packages");

    let service = GenerationService::new(Box::new(LocalFilesystem::new()));
    let report = service
        .generate(&ProjectConfig::default(), &out, GenerationScope::all())
        .unwrap();

    for dir in ["core", "contracts", "adapter-web", "adapter-mobile"] {
        assert!(out.join(dir).join("package.json").is_file(), "{dir}/package.json");
    }
    assert!(out.join("contracts/openapi/openapi.yaml").is_file());
    assert!(out.join("adapter-mobile/src/extensions/offline.ts").is_file());
    assert!(!out.join("adapter-web/src/extensions/offline.ts").exists());

    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.join("adapter-web/package.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["name"], "@corebridge/adapter-web");
    assert_eq!(
        report.total_files(),
        walk_count(&out),
        "report file count matches what is on disk"
    );
}

#[test]
fn memory_and_dry_run_agree() {
    let fs = MemoryFilesystem::new();
    let service = GenerationService::new(Box::new(fs.clone()));
    let config = ProjectConfig::new(["invoice"], ["mobile"]);

    service
        .generate(&config, Path::new("/out"), GenerationScope::all())
        .unwrap();
    let rendered = GenerationService::render(&config, GenerationScope::all()).unwrap();

    let expected: usize = rendered.iter().map(ArtifactSet::len).sum();
    assert_eq!(fs.list_files().len(), expected);
    assert!(fs.exists(Path::new("/out/adapter-mobile/src/controllers/InvoiceController.ts")));
}

#[test]
fn scoped_run_leaves_other_packages_alone() {
    let fs = MemoryFilesystem::new();
    let service = GenerationService::new(Box::new(fs.clone()));

    service
        .generate(
            &ProjectConfig::default(),
            Path::new("/out"),
            GenerationScope::from_flags(false, true, false),
        )
        .unwrap();

    assert!(!fs.files_under(Path::new("/out/contracts")).is_empty());
    assert!(fs.files_under(Path::new("/out/core")).is_empty());
    assert!(fs.files_under(Path::new("/out/adapter-web")).is_empty());
}

fn walk_count(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}
