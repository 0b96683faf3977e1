//! The `contracts` package: OpenAPI document, JSON Schemas and TypeScript
//! DTOs, all projected from the same route table and field convention.

use tracing::{debug, warn};

use super::{PackageManifest, lines, to_pretty_json, to_yaml, tsconfig};
use crate::application::plan::GenerationPlan;
use crate::domain::schema::{
    self, CREATE_FIELDS, RESPONSE_FIELDS, ResponseField, create_request_schema_name,
    response_schema_name,
};
use crate::domain::{ArtifactSet, ContractFormat, DomainDescriptor, PackageKind, RouteTable};
use crate::error::CoreBridgeResult;

pub const OPENAPI_PATH: &str = "openapi/openapi.yaml";

/// Error codes shared with the core package's `DomainError` subclasses.
pub const ERROR_CODES: &[&str] = &[
    "VALIDATION_ERROR",
    "NOT_FOUND",
    "RESOURCE_EXISTS",
    "UNAUTHORIZED",
    "FORBIDDEN",
];

pub fn generate(plan: &GenerationPlan) -> CoreBridgeResult<ArtifactSet> {
    let settings = plan.contracts();
    if settings.format == ContractFormat::Graphql {
        warn!(
            format = %settings.format,
            "GraphQL contracts are not generated; emitting the OpenAPI document instead"
        );
    }

    let package = PackageKind::Contracts;
    let manifest = PackageManifest::new(&package, "OpenAPI specs and JSON Schemas")
        .files(&["dist", "openapi", "schemas"])
        .typescript();

    let document = schema::openapi_document(&settings.version, plan.domains(), plan.routes());

    let mut set = ArtifactSet::new(package)
        .with("package.json", manifest.render()?)
        .with("tsconfig.json", to_pretty_json(&tsconfig(), "tsconfig.json")?)
        .with(OPENAPI_PATH, to_yaml(&document, OPENAPI_PATH)?);

    for domain in plan.domains() {
        let path = format!("schemas/{}.schema.json", domain.capitalized());
        let content = to_pretty_json(&schema::json_schema(domain), &path)?;
        set.add(path, content);
    }

    set.add("src/index.ts", types(plan.domains(), plan.routes()));

    debug!(files = set.len(), "Contracts package rendered");
    Ok(set)
}

fn interface(name: &str, fields: &[ResponseField]) -> String {
    let body = lines(
        fields
            .iter()
            .map(|f| format!("  {}: {};", f.name, f.ty.ts_type)),
    );
    format!("export interface {name} {{\n{body}}}\n")
}

fn domain_types(domain: &DomainDescriptor) -> String {
    format!(
        "// ============ {} Types ============\n\n{}\n{}\n",
        domain.capitalized(),
        interface(&create_request_schema_name(domain), CREATE_FIELDS),
        interface(&response_schema_name(domain), RESPONSE_FIELDS),
    )
}

fn operations_table(routes: &RouteTable) -> String {
    let rows = lines(routes.iter().map(|r| {
        format!(
            "  {{ method: '{}', path: '{}', operationId: '{}' }},",
            r.method, r.path, r.operation_id
        )
    }));
    format!(
        "// ============ Operations ============\n\n\
         export const operations = [\n{rows}] as const;\n\n\
         export type OperationId = (typeof operations)[number]['operationId'];\n\n"
    )
}

fn types(domains: &[DomainDescriptor], routes: &RouteTable) -> String {
    let mut out = String::from("// Generated TypeScript types from OpenAPI/JSON Schema\n\n");
    for domain in domains {
        out.push_str(&domain_types(domain));
    }
    out.push_str(&operations_table(routes));

    let codes = ERROR_CODES
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!(
        "// ============ Error Types ============\n\n\
         export type ErrorCode = {codes};\n\n\
         export interface ApiError {{\n  code: ErrorCode;\n  message: string;\n}}\n"
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectConfig;
    use serde_json::Value;

    fn plan() -> GenerationPlan {
        GenerationPlan::new(&ProjectConfig::default())
    }

    #[test]
    fn emits_expected_layout() {
        let set = generate(&plan()).unwrap();
        for path in [
            "package.json",
            "tsconfig.json",
            OPENAPI_PATH,
            "schemas/User.schema.json",
            "schemas/Project.schema.json",
            "src/index.ts",
        ] {
            assert!(set.contains(path), "missing {path}");
        }
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn yaml_document_parses_and_carries_version() {
        let plan = GenerationPlan::new(
            &ProjectConfig::default().with_contracts(ContractFormat::Openapi, "3.0.3"),
        );
        let set = generate(&plan).unwrap();
        let doc: Value = serde_yaml::from_str(set.get(OPENAPI_PATH).unwrap()).unwrap();

        assert_eq!(doc["openapi"], "3.0.3");
        assert!(doc["paths"]["/projects/{projectId}"]["get"].is_object());
    }

    #[test]
    fn graphql_still_emits_openapi() {
        let plan = GenerationPlan::new(
            &ProjectConfig::default().with_contracts(ContractFormat::Graphql, "3.1.0"),
        );
        let set = generate(&plan).unwrap();
        assert!(set.contains(OPENAPI_PATH));
    }

    #[test]
    fn dto_module_lists_fields_and_operations() {
        let set = generate(&plan()).unwrap();
        let ts = set.get("src/index.ts").unwrap();

        assert!(ts.contains("export interface CreateUserRequest {\n  name: string;\n}\n"));
        assert!(ts.contains(
            "export interface ProjectResponse {\n  id: string;\n  name: string;\n  \
             createdAt: string;\n  updatedAt: string;\n}\n"
        ));
        assert!(ts.contains(
            "{ method: 'GET', path: '/users/{userId}', operationId: 'getUser' },"
        ));
        assert!(ts.contains("export type ErrorCode = 'VALIDATION_ERROR' | 'NOT_FOUND'"));
    }

    #[test]
    fn json_schema_files_are_valid_json() {
        let set = generate(&plan()).unwrap();
        let schema: Value =
            serde_json::from_str(set.get("schemas/Project.schema.json").unwrap()).unwrap();
        assert_eq!(schema["title"], "Project");
    }

    #[test]
    fn manifest_ships_contract_directories() {
        let set = generate(&plan()).unwrap();
        let manifest: Value = serde_json::from_str(set.get("package.json").unwrap()).unwrap();
        assert_eq!(manifest["name"], "@corebridge/contracts");
        assert_eq!(manifest["files"], serde_json::json!(["dist", "openapi", "schemas"]));
    }
}
