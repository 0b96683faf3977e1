//! The `core` package: domain models, errors, repository ports and one
//! use-case module per route.
//!
//! Use-case functions are named after the route's `operationId`, which is
//! what the adapter controllers import.

use tracing::debug;

use super::{PackageManifest, lines, to_pretty_json, tsconfig};
use crate::application::plan::GenerationPlan;
use crate::domain::schema::{CREATE_FIELDS, FieldType, RESPONSE_FIELDS, ResponseField};
use crate::domain::{
    ArtifactSet, DomainDescriptor, OperationKind, PackageKind, RouteEntry, capitalize,
};
use crate::error::CoreBridgeResult;

pub const ZOD_VERSION: &str = "^3.22.4";

pub fn generate(plan: &GenerationPlan) -> CoreBridgeResult<ArtifactSet> {
    let package = PackageKind::Core;
    let manifest = PackageManifest::new(&package, "Platform-agnostic business logic core")
        .dependency("zod", ZOD_VERSION)
        .typescript();

    let mut set = ArtifactSet::new(package)
        .with("package.json", manifest.render()?)
        .with("tsconfig.json", to_pretty_json(&tsconfig(), "tsconfig.json")?)
        .with("src/index.ts", index(plan.domains()))
        .with("src/domain/errors/DomainError.ts", DOMAIN_ERROR)
        .with("src/ports/Pagination.ts", PAGINATION_PORT)
        .with("src/ports/index.ts", ports_index(plan.domains()))
        .with("src/use-cases/index.ts", use_cases_index(plan.domains()));

    for domain in plan.domains() {
        let name = domain.capitalized();
        set.add(format!("src/domain/models/{name}.ts"), model(domain));
        set.add(format!("src/ports/I{name}Repository.ts"), repository(domain));

        let routes: Vec<&RouteEntry> = plan.routes().for_domain(domain.token()).collect();
        set.add(
            format!("src/use-cases/{}/index.ts", domain.token()),
            lines(
                routes
                    .iter()
                    .map(|r| format!("export * from './{}.js';", use_case_module(r))),
            ),
        );
        for route in routes {
            set.add(
                format!("src/use-cases/{}/{}.ts", domain.token(), use_case_module(route)),
                use_case(route),
            );
        }
    }

    debug!(files = set.len(), "Core package rendered");
    Ok(set)
}

/// Module file stem of a route's use case, e.g. `ListUsers`.
pub fn use_case_module(route: &RouteEntry) -> String {
    capitalize(&route.operation_id)
}

fn index(domains: &[DomainDescriptor]) -> String {
    let models = lines(domains.iter().map(|d| {
        format!("export * from './domain/models/{}.js';", d.capitalized())
    }));

    format!(
        "// Domain Models
{models}
// Domain Errors
export * from './domain/errors/DomainError.js';

// Ports
export * from './ports/index.js';

// Use Cases
export * from './use-cases/index.js';
"
    )
}

fn zod_type(ty: FieldType) -> &'static str {
    match ty.format {
        Some("uuid") => "z.string().uuid()",
        Some("date-time") => "z.date()",
        _ => "z.string()",
    }
}

fn is_date(field: &ResponseField) -> bool {
    field.ty.format == Some("date-time")
}

fn model(domain: &DomainDescriptor) -> String {
    let name = domain.capitalized();
    let entity_fields = lines(
        RESPONSE_FIELDS
            .iter()
            .map(|f| format!("  {}: {},", f.name, zod_type(f.ty))),
    );
    let create_fields = lines(
        CREATE_FIELDS
            .iter()
            .map(|f| format!("  {}: {}.min(1),", f.name, zod_type(f.ty))),
    );
    let response_fields = lines(
        RESPONSE_FIELDS
            .iter()
            .map(|f| format!("  {}: {};", f.name, f.ty.ts_type)),
    );
    let mapping = lines(RESPONSE_FIELDS.iter().map(|f| {
        if is_date(f) {
            format!("    {0}: entity.{0}.toISOString(),", f.name)
        } else {
            format!("    {0}: entity.{0},", f.name)
        }
    }));

    format!(
        "import {{ z }} from 'zod';

/**
 * {name} validation schema
 */
export const {name}Schema = z.object({{
{entity_fields}}});

export type {name} = z.infer<typeof {name}Schema>;

/**
 * Create{name} input schema
 */
export const Create{name}InputSchema = z.object({{
{create_fields}}});

export type Create{name}Input = z.infer<typeof Create{name}InputSchema>;

/**
 * {name} response (public-facing)
 */
export interface {name}Response {{
{response_fields}}}

export function to{name}Response(entity: {name}): {name}Response {{
  return {{
{mapping}  }};
}}
"
    )
}

fn ports_index(domains: &[DomainDescriptor]) -> String {
    let mut out = String::from("export * from './Pagination.js';\n");
    out.push_str(&lines(domains.iter().map(|d| {
        format!("export * from './I{}Repository.js';", d.capitalized())
    })));
    out
}

fn repository(domain: &DomainDescriptor) -> String {
    let name = domain.capitalized();
    let token = domain.token();
    format!(
        "import {{ {name} }} from '../domain/models/{name}.js';
import {{ Page, PageParams }} from './Pagination.js';

/**
 * {name} repository interface
 */
export interface I{name}Repository {{
  findById(id: string): Promise<{name} | null>;
  findAll(params: PageParams): Promise<Page<{name}>>;
  create(data: Omit<{name}, 'id' | 'createdAt' | 'updatedAt'>): Promise<{name}>;
  update(id: string, data: Partial<{name}>): Promise<{name}>;
  delete(id: string): Promise<void>;
}}

/**
 * Dependencies of the {token} use cases
 */
export interface {name}Deps {{
  {token}Repository: I{name}Repository;
}}
"
    )
}

fn use_cases_index(domains: &[DomainDescriptor]) -> String {
    lines(
        domains
            .iter()
            .map(|d| format!("export * from './{}/index.js';", d.token())),
    )
}

fn use_case(route: &RouteEntry) -> String {
    let domain = &route.domain;
    let name = domain.capitalized();
    let token = domain.token();
    let op = &route.operation_id;
    let header = format!("/**\n * {} {}\n */", route.method, route.path);

    match route.kind {
        OperationKind::List => format!(
            "import {{ {name}Response, to{name}Response }} from '../../domain/models/{name}.js';
import {{ {name}Deps }} from '../../ports/I{name}Repository.js';
import {{ Page, PageParams }} from '../../ports/Pagination.js';

{header}
export async function {op}(params: PageParams, deps: {name}Deps): Promise<Page<{name}Response>> {{
  const page = await deps.{token}Repository.findAll(params);
  return {{ ...page, items: page.items.map(to{name}Response) }};
}}
"
        ),
        OperationKind::Create => format!(
            "import {{
  Create{name}Input,
  Create{name}InputSchema,
  {name}Response,
  to{name}Response,
}} from '../../domain/models/{name}.js';
import {{ ValidationError }} from '../../domain/errors/DomainError.js';
import {{ {name}Deps }} from '../../ports/I{name}Repository.js';

{header}
export async function {op}(input: Create{name}Input, deps: {name}Deps): Promise<{name}Response> {{
  const parsed = Create{name}InputSchema.safeParse(input);
  if (!parsed.success) {{
    throw new ValidationError(parsed.error.message);
  }}

  const entity = await deps.{token}Repository.create(parsed.data);
  return to{name}Response(entity);
}}
"
        ),
        OperationKind::Get => format!(
            "import {{ {name}Response, to{name}Response }} from '../../domain/models/{name}.js';
import {{ NotFoundError }} from '../../domain/errors/DomainError.js';
import {{ {name}Deps }} from '../../ports/I{name}Repository.js';

{header}
export async function {op}(id: string, deps: {name}Deps): Promise<{name}Response> {{
  const entity = await deps.{token}Repository.findById(id);
  if (!entity) {{
    throw new NotFoundError('{name}', id);
  }}

  return to{name}Response(entity);
}}
"
        ),
    }
}

const PAGINATION_PORT: &str = "/**
 * Page request understood by every repository
 */
export interface PageParams {
  limit: number;
  offset?: number;
  cursor?: string;
}

/**
 * One page of entities
 */
export interface Page<T> {
  items: T[];
  total: number;
  hasMore: boolean;
}
";

const DOMAIN_ERROR: &str = "/**
 * Base domain error
 */
export abstract class DomainError extends Error {
  abstract readonly code: string;
  abstract readonly statusCode: number;

  constructor(message: string) {
    super(message);
    this.name = this.constructor.name;
  }

  toJSON(): { code: string; message: string } {
    return { code: this.code, message: this.message };
  }
}

export class ValidationError extends DomainError {
  readonly code = 'VALIDATION_ERROR';
  readonly statusCode = 400;
}

export class NotFoundError extends DomainError {
  readonly code = 'NOT_FOUND';
  readonly statusCode = 404;

  constructor(resourceType: string, id: string) {
    super(`${resourceType} with id '${id}' not found`);
  }
}

export class ConflictError extends DomainError {
  readonly code = 'RESOURCE_EXISTS';
  readonly statusCode = 409;
}

export class UnauthorizedError extends DomainError {
  readonly code = 'UNAUTHORIZED';
  readonly statusCode = 401;
}

export class ForbiddenError extends DomainError {
  readonly code = 'FORBIDDEN';
  readonly statusCode = 403;
}
";
