//! Integration tests for corebridge-core.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use corebridge_core::{
    domain::{RouteTable, policy, schema},
    prelude::*,
};
use serde_json::Value;

/// Minimal in-memory sink keyed by native path.
#[derive(Clone, Default)]
struct Sink {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl Sink {
    fn read(&self, path: &str) -> String {
        self.files
            .lock()
            .unwrap()
            .get(Path::new(path))
            .cloned()
            .unwrap_or_else(|| panic!("{path} was not written"))
    }
}

impl Filesystem for Sink {
    fn create_dir_all(&self, _path: &Path) -> CoreBridgeResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreBridgeResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

fn default_run() -> (Sink, GenerationReport) {
    let sink = Sink::default();
    let service = GenerationService::new(Box::new(sink.clone()));
    let report = service
        .generate(
            &ProjectConfig::new(["user", "project"], ["web", "mobile"]),
            Path::new("/out"),
            GenerationScope::all(),
        )
        .unwrap();
    (sink, report)
}

fn mounts(index: &str) -> Vec<String> {
    index
        .lines()
        .filter_map(|l| l.trim().strip_prefix("router.use('"))
        .filter_map(|l| l.split('\'').next())
        .map(str::to_string)
        .collect()
}

#[test]
fn end_to_end_user_project_web_mobile() {
    let (sink, report) = default_run();
    assert_eq!(report.packages.len(), 4);

    let doc: Value = serde_yaml::from_str(&sink.read("/out/contracts/openapi/openapi.yaml")).unwrap();
    for path in ["/users", "/users/{userId}", "/projects", "/projects/{projectId}"] {
        assert!(doc["paths"].get(path).is_some(), "missing path {path}");
    }

    let mobile_index = sink.read("/out/adapter-mobile/src/index.ts");
    assert_eq!(mounts(&mobile_index), ["/users", "/projects"]);
    assert!(mobile_index.contains("export * from './extensions/offline.js';"));
    assert!(sink.exists(Path::new("/out/adapter-mobile/src/extensions/offline.ts")));

    let web_index = sink.read("/out/adapter-web/src/index.ts");
    assert_eq!(mounts(&web_index), ["/users", "/projects"]);
    assert!(!web_index.contains("offline"));
    assert!(!sink.exists(Path::new("/out/adapter-web/src/extensions/offline.ts")));
}

#[test]
fn openapi_operation_ids_round_trip_with_route_table() {
    let (sink, _) = default_run();
    let doc: Value = serde_yaml::from_str(&sink.read("/out/contracts/openapi/openapi.yaml")).unwrap();

    let mut documented = schema::document_operation_ids(&doc);
    let plan = GenerationPlan::new(&ProjectConfig::new(["user", "project"], ["web"]));
    let mut routed: Vec<String> = plan
        .routes()
        .operation_ids()
        .into_iter()
        .map(String::from)
        .collect();

    documented.sort();
    routed.sort();
    assert_eq!(documented, routed);
}

#[test]
fn every_operation_has_a_use_case_and_a_controller_call() {
    let (sink, _) = default_run();
    let plan = GenerationPlan::new(&ProjectConfig::default());

    for route in plan.routes() {
        let name = route.domain.capitalized();
        let core_index = sink.read(&format!("/out/core/src/use-cases/{}/index.ts", route.domain.token()));
        assert!(core_index.contains(&format!("./{}.js", corebridge_core::domain::capitalize(&route.operation_id))));

        for adapter in ["web", "mobile"] {
            let controller = sink.read(&format!("/out/adapter-{adapter}/src/controllers/{name}Controller.ts"));
            assert!(
                controller.contains(&format!("await {}(", route.operation_id)),
                "{adapter} controller never calls {}",
                route.operation_id
            );
        }
    }
}

#[test]
fn contracts_describe_congruent_field_sets() {
    let (sink, _) = default_run();
    let doc: Value = serde_yaml::from_str(&sink.read("/out/contracts/openapi/openapi.yaml")).unwrap();
    let json_schema: Value = serde_json::from_str(&sink.read("/out/contracts/schemas/User.schema.json")).unwrap();
    let dto = sink.read("/out/contracts/src/index.ts");

    let documented: Vec<&String> = doc["components"]["schemas"]["UserResponse"]["properties"]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    let schema_fields: Vec<&String> = json_schema["properties"].as_object().unwrap().keys().collect();
    assert_eq!(documented, schema_fields);

    for field in documented {
        assert!(dto.contains(&format!("  {field}: string;")));
    }
}

#[test]
fn unknown_adapter_resolves_to_web() {
    assert_eq!(policy::resolve("desktop"), policy::resolve("web"));
}

#[test]
fn route_table_has_three_entries_per_domain() {
    let domains: Vec<_> = ["a", "bb", "order"]
        .into_iter()
        .map(corebridge_core::domain::DomainDescriptor::derive)
        .collect();
    let table = RouteTable::build(&domains);
    assert_eq!(table.len(), 9);
    for d in &domains {
        assert_eq!(table.for_domain(d.token()).count(), 3);
    }
}

#[test]
fn regeneration_overwrites() {
    let sink = Sink::default();
    sink.write_file(Path::new("/out/core/src/index.ts"), "// hand edited").unwrap();

    let service = GenerationService::new(Box::new(sink.clone()));
    service
        .generate(
            &ProjectConfig::default(),
            Path::new("/out"),
            GenerationScope::from_flags(true, false, false),
        )
        .unwrap();

    assert!(sink.read("/out/core/src/index.ts").starts_with("// Domain Models"));
}
