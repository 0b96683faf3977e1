//! OpenAPI and JSON Schema synthesis.
//!
//! Every domain shares one field convention ([`RESPONSE_FIELDS`]). The
//! OpenAPI components, the per-domain JSON Schema documents and the
//! TypeScript DTOs of the contracts package are all built from it, so the
//! three can never disagree on a field set.
//!
//! Paths are a projection of the [`RouteTable`]: one path item per distinct
//! route path, one operation per route entry.

use serde_json::{Map, Value, json};

use crate::domain::naming::DomainDescriptor;
use crate::domain::routes::{OperationKind, RouteEntry, RouteTable};

pub const API_TITLE: &str = "CoreBridge API";
pub const API_VERSION: &str = "1.0.0";
pub const API_DESCRIPTION: &str = "Platform-agnostic API";
pub const SERVER_URL: &str = "/api/v1";
pub const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";
pub const SCHEMA_ID_BASE: &str = "https://corebridge.dev/schemas";

/// Primitive type of a response field, plus its string format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    pub json_type: &'static str,
    pub format: Option<&'static str>,
    pub ts_type: &'static str,
}

/// One field of every `{Name}Response`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseField {
    pub name: &'static str,
    pub ty: FieldType,
    /// Listed under `required` in the JSON Schema document.
    pub required: bool,
}

const UUID: FieldType = FieldType {
    json_type: "string",
    format: Some("uuid"),
    ts_type: "string",
};
const STRING: FieldType = FieldType {
    json_type: "string",
    format: None,
    ts_type: "string",
};
const DATE_TIME: FieldType = FieldType {
    json_type: "string",
    format: Some("date-time"),
    ts_type: "string",
};

/// `id, name, createdAt, updatedAt` in emission order.
pub const RESPONSE_FIELDS: &[ResponseField] = &[
    ResponseField {
        name: "id",
        ty: UUID,
        required: true,
    },
    ResponseField {
        name: "name",
        ty: STRING,
        required: false,
    },
    ResponseField {
        name: "createdAt",
        ty: DATE_TIME,
        required: true,
    },
    ResponseField {
        name: "updatedAt",
        ty: DATE_TIME,
        required: true,
    },
];

/// Fields accepted by `Create{Name}Request`; all required.
pub const CREATE_FIELDS: &[ResponseField] = &[ResponseField {
    name: "name",
    ty: STRING,
    required: true,
}];

/// `{Name}Response`
pub fn response_schema_name(domain: &DomainDescriptor) -> String {
    format!("{}Response", domain.capitalized())
}

/// `Create{Name}Request`
pub fn create_request_schema_name(domain: &DomainDescriptor) -> String {
    format!("Create{}Request", domain.capitalized())
}

fn component_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn field_schema(ty: FieldType) -> Value {
    match ty.format {
        Some(format) => json!({ "type": ty.json_type, "format": format }),
        None => json!({ "type": ty.json_type }),
    }
}

fn properties(fields: &[ResponseField]) -> Map<String, Value> {
    fields
        .iter()
        .map(|f| (f.name.to_string(), field_schema(f.ty)))
        .collect()
}

fn required(fields: &[ResponseField]) -> Vec<&'static str> {
    fields.iter().filter(|f| f.required).map(|f| f.name).collect()
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn summary(entry: &RouteEntry) -> String {
    let domain = &entry.domain;
    match entry.kind {
        OperationKind::List => format!("List {}", domain.route_segment()),
        OperationKind::Create => format!("Create {}", domain.token()),
        OperationKind::Get => format!("Get {} by ID", domain.token()),
    }
}

/// OpenAPI operation object for one route entry.
fn operation(entry: &RouteEntry) -> Value {
    let domain = &entry.domain;
    let response = response_schema_name(domain);

    let mut op = Map::new();
    op.insert("operationId".into(), Value::String(entry.operation_id.clone()));
    op.insert("summary".into(), Value::String(summary(entry)));

    match entry.kind {
        OperationKind::List => {
            op.insert(
                "responses".into(),
                json!({
                    "200": {
                        "description": "Success",
                        "content": json_content(json!({
                            "type": "object",
                            "properties": {
                                "data": { "type": "array", "items": component_ref(&response) },
                                "pagination": { "type": "object" }
                            }
                        }))
                    }
                }),
            );
        }
        OperationKind::Create => {
            op.insert(
                "requestBody".into(),
                json!({
                    "required": true,
                    "content": json_content(component_ref(&create_request_schema_name(domain)))
                }),
            );
            op.insert(
                "responses".into(),
                json!({
                    "201": {
                        "description": "Created",
                        "content": json_content(component_ref(&response))
                    }
                }),
            );
        }
        OperationKind::Get => {
            op.insert(
                "parameters".into(),
                json!([{
                    "name": domain.path_param(),
                    "in": "path",
                    "required": true,
                    "schema": field_schema(UUID)
                }]),
            );
            op.insert(
                "responses".into(),
                json!({
                    "200": {
                        "description": "Success",
                        "content": json_content(component_ref(&response))
                    }
                }),
            );
        }
    }

    Value::Object(op)
}

/// The OpenAPI document for a route table.
///
/// `version` is emitted verbatim as the top-level `openapi` field. The
/// `BearerAuth` security scheme is always declared, whatever auth the
/// adapters use.
pub fn openapi_document(version: &str, domains: &[DomainDescriptor], routes: &RouteTable) -> Value {
    let mut paths: Map<String, Value> = Map::new();
    for entry in routes {
        let item = paths
            .entry(entry.path.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(item) = item {
            item.insert(entry.method.as_lower().to_string(), operation(entry));
        }
    }

    let mut schemas: Map<String, Value> = Map::new();
    for domain in domains {
        schemas.insert(
            create_request_schema_name(domain),
            json!({
                "type": "object",
                "required": required(CREATE_FIELDS),
                "properties": properties(CREATE_FIELDS)
            }),
        );
        schemas.insert(
            response_schema_name(domain),
            json!({
                "type": "object",
                "properties": properties(RESPONSE_FIELDS)
            }),
        );
    }

    json!({
        "openapi": version,
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": API_DESCRIPTION
        },
        "servers": [{ "url": SERVER_URL }],
        "paths": paths,
        "components": {
            "schemas": schemas,
            "securitySchemes": {
                "BearerAuth": {
                    "type": "http",
                    "scheme": "bearer",
                    "bearerFormat": "JWT"
                }
            }
        }
    })
}

/// Standalone JSON Schema document for one domain's response shape.
pub fn json_schema(domain: &DomainDescriptor) -> Value {
    let name = domain.capitalized();
    json!({
        "$schema": JSON_SCHEMA_DIALECT,
        "$id": format!("{SCHEMA_ID_BASE}/{name}"),
        "title": name,
        "type": "object",
        "properties": properties(RESPONSE_FIELDS),
        "required": required(RESPONSE_FIELDS)
    })
}

/// Operation ids found under `paths` of an OpenAPI document, in order.
pub fn document_operation_ids(document: &Value) -> Vec<String> {
    document
        .get("paths")
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|paths| paths.values())
        .filter_map(Value::as_object)
        .flat_map(|item| item.values())
        .filter_map(|op| op.get("operationId").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}
