//! One `adapter-{id}` package per configured adapter.
//!
//! Everything platform-specific is chosen from the resolved
//! [`PlatformProfile`]; the adapter id only names the package and its router
//! factory. Controllers are policy-free: every pagination module exports
//! `parsePagination`/`toPage` and every response module exports
//! `sendResponse`/`sendCreated` with the same signatures.

use tracing::debug;

use super::{PackageManifest, comma_list, lines, to_pretty_json, tsconfig};
use crate::application::plan::{AdapterTarget, GenerationPlan};
use crate::domain::policy::auth::{AuthRejection, BEARER_PREFIX, SESSION_COOKIE};
use crate::domain::policy::envelope::{OFFLINE_KEY, cache_ttl, can_queue_offline};
use crate::domain::policy::pagination::{limit_parser, offset_parser};
use crate::domain::{
    ArtifactSet, AuthScheme, DomainDescriptor, EnvelopeStyle, Extension, OperationKind,
    PackageKind, PaginationStyle, PlatformProfile, RouteEntry, RouteTable, capitalize,
};
use crate::error::CoreBridgeResult;

pub const EXPRESS_VERSION: &str = "^4.18.2";
pub const EXPRESS_TYPES_VERSION: &str = "^4.17.21";
pub const COOKIE_PARSER_VERSION: &str = "^1.4.6";
pub const COOKIE_PARSER_TYPES_VERSION: &str = "^1.4.6";

pub fn generate(plan: &GenerationPlan, target: &AdapterTarget) -> CoreBridgeResult<ArtifactSet> {
    let profile = target.profile;
    let package = PackageKind::Adapter(target.id.clone());

    let mut manifest = PackageManifest::new(
        &package,
        format!("{} platform adapter for CoreBridge", capitalize(&target.id)),
    )
    .dependency(PackageKind::Core.npm_name(), "^0.1.0")
    .dependency(PackageKind::Contracts.npm_name(), "^0.1.0")
    .dependency("express", EXPRESS_VERSION)
    .typescript()
    .dev_dependency("@types/express", EXPRESS_TYPES_VERSION);
    if profile.auth == AuthScheme::Session {
        manifest = manifest
            .dependency("cookie-parser", COOKIE_PARSER_VERSION)
            .dev_dependency("@types/cookie-parser", COOKIE_PARSER_TYPES_VERSION);
    }

    let mut set = ArtifactSet::new(package)
        .with("package.json", manifest.render()?)
        .with("tsconfig.json", to_pretty_json(&tsconfig(), "tsconfig.json")?)
        .with("src/middleware/auth.ts", auth_middleware(profile.auth))
        .with("src/middleware/errorHandler.ts", ERROR_HANDLER)
        .with("src/transformers/request.ts", REQUEST_TRANSFORMER)
        .with("src/transformers/response.ts", response_transformer(profile.envelope));

    for extension in profile.extensions {
        let content = match extension {
            Extension::Pagination => pagination_extension(profile.pagination),
            Extension::Offline => offline_extension(plan.routes()),
        };
        set.add(format!("src/extensions/{}.ts", extension.module_name()), content);
    }

    for domain in plan.domains() {
        set.add(
            format!("src/controllers/{}Controller.ts", domain.capitalized()),
            controller(domain, plan.routes()),
        );
    }

    set.add("src/index.ts", index(plan, target));

    debug!(
        adapter = %target.id,
        platform = %profile.platform,
        files = set.len(),
        "Adapter package rendered"
    );
    Ok(set)
}

/// `create{Id}Router`, the factory exported by the adapter's index.
pub fn router_factory_name(adapter_id: &str) -> String {
    format!("create{}Router", capitalize(adapter_id))
}

fn reject_401() -> String {
    let r = AuthRejection::UNAUTHORIZED;
    format!(
        "res.status({}).json({{ code: '{}', message: '{}' }});",
        r.status, r.code, r.message
    )
}

fn auth_middleware(scheme: AuthScheme) -> String {
    let reject = reject_401();
    let source = scheme.credential_source();
    match scheme {
        AuthScheme::Session => format!(
            "import type {{ Request, Response, NextFunction }} from 'express';

/**
 * Session authentication middleware
 *
 * Requires {source}. The session id itself is not validated here.
 */
export function authMiddleware(req: Request, res: Response, next: NextFunction): void {{
  const sessionId: string | undefined = req.cookies?.['{SESSION_COOKIE}'];

  if (!sessionId) {{
    {reject}
    return;
  }}

  // req.user = await validateSession(sessionId);

  next();
}}
"
        ),
        AuthScheme::Bearer => format!(
            "import type {{ Request, Response, NextFunction }} from 'express';

const BEARER_PREFIX = '{BEARER_PREFIX}';

/**
 * Bearer token authentication middleware
 *
 * Requires {source}. The token itself is not validated here.
 */
export function authMiddleware(req: Request, res: Response, next: NextFunction): void {{
  const authHeader = req.headers.authorization ?? '';
  const token = authHeader.startsWith(BEARER_PREFIX) ? authHeader.slice(BEARER_PREFIX.length) : '';

  if (!token) {{
    {reject}
    return;
  }}

  // req.user = await validateToken(token);

  next();
}}
"
        ),
    }
}

fn response_transformer(envelope: EnvelopeStyle) -> String {
    match envelope {
        EnvelopeStyle::Plain => "import type { Response } from 'express';

/**
 * Send a successful payload unchanged
 */
export function sendResponse<T extends object>(
  res: Response,
  _operationId: string,
  data: T,
  statusCode = 200
): void {
  res.status(statusCode).json(data);
}

/**
 * Send created response
 */
export function sendCreated<T extends object>(res: Response, _operationId: string, data: T): void {
  res.status(201).json(data);
}

export function sendNoContent(res: Response): void {
  res.status(204).end();
}
"
        .to_string(),
        EnvelopeStyle::OfflineWrapped => format!(
            "import type {{ Response }} from 'express';
import {{ getOfflineFlags }} from '../extensions/offline.js';

/**
 * Send a successful payload with offline caching hints for `operationId`
 */
export function sendResponse<T extends object>(
  res: Response,
  operationId: string,
  data: T,
  statusCode = 200
): void {{
  res.status(statusCode).json({{
    ...data,
    {OFFLINE_KEY}: getOfflineFlags(operationId),
  }});
}}

/**
 * Send created response
 */
export function sendCreated<T extends object>(res: Response, operationId: string, data: T): void {{
  sendResponse(res, operationId, data, 201);
}}

/**
 * Send created response with tokens
 */
export function sendCreatedWithTokens<T extends object>(
  res: Response,
  operationId: string,
  data: T,
  tokens: {{ access: string; refresh: string }}
): void {{
  sendResponse(res, operationId, {{ ...data, tokens }}, 201);
}}

export function sendNoContent(res: Response): void {{
  res.status(204).end();
}}

/**
 * Send a payload that clients must never cache
 */
export function sendNoCacheResponse<T extends object>(res: Response, data: T, statusCode = 200): void {{
  res.status(statusCode).json({{
    ...data,
    {OFFLINE_KEY}: {{ cacheable: false }},
  }});
}}
"
        ),
    }
}

fn pagination_extension(style: PaginationStyle) -> String {
    let prelude = limit_parser();

    match style {
        PaginationStyle::Cursor => format!(
            "/**
 * Cursor-based pagination for infinite scroll
 */
{prelude}
export interface CursorPaginationParams {{
  cursor?: string;
  limit: number;
}}

export interface CursorPaginatedResponse<T> {{
  data: T[];
  pagination: {{
    hasMore: boolean;
    nextCursor: string | null;
  }};
}}

export function parseCursorPagination(query: Record<string, unknown>): CursorPaginationParams {{
  const cursor = typeof query.cursor === 'string' && query.cursor !== '' ? query.cursor : undefined;
  return {{ cursor, limit: parseLimit(query.limit) }};
}}

export function wrapCursorPagination<T>(
  items: T[],
  hasMore: boolean,
  getCursor: (item: T) => string
): CursorPaginatedResponse<T> {{
  return {{
    data: items,
    pagination: {{
      hasMore,
      nextCursor: hasMore && items.length > 0 ? getCursor(items[items.length - 1]) : null,
    }},
  }};
}}

export const parsePagination = parseCursorPagination;

export function toPage<T extends {{ id: string }}>(
  result: {{ items: T[]; hasMore: boolean }},
  _params: CursorPaginationParams
): CursorPaginatedResponse<T> {{
  return wrapCursorPagination(result.items, result.hasMore, (item) => item.id);
}}
"
        ),
        PaginationStyle::Offset => format!(
            "/**
 * Offset-based pagination with total count
 */
{prelude}
{offset}
export interface OffsetPaginationParams {{
  offset: number;
  limit: number;
}}

export interface OffsetPaginatedResponse<T> {{
  data: T[];
  pagination: {{
    total: number;
    offset: number;
    limit: number;
    hasMore: boolean;
  }};
}}

export function parseOffsetPagination(query: Record<string, unknown>): OffsetPaginationParams {{
  return {{ offset: parseOffset(query.offset), limit: parseLimit(query.limit) }};
}}

export function wrapOffsetPagination<T>(
  items: T[],
  total: number,
  offset: number,
  limit: number
): OffsetPaginatedResponse<T> {{
  return {{
    data: items,
    pagination: {{
      total,
      offset,
      limit,
      hasMore: offset + items.length < total,
    }},
  }};
}}

export const parsePagination = parseOffsetPagination;

export function toPage<T>(
  result: {{ items: T[]; total: number }},
  params: OffsetPaginationParams
): OffsetPaginatedResponse<T> {{
  return wrapOffsetPagination(result.items, result.total, params.offset, params.limit);
}}
",
            offset = offset_parser(),
        ),
    }
}

fn offline_extension(routes: &RouteTable) -> String {
    let ttl_rows = lines(
        routes
            .iter()
            .filter_map(|r| cache_ttl(r.kind).map(|ttl| format!("  ['{}', {ttl}],", r.operation_id))),
    );
    let queueable = lines(
        routes
            .iter()
            .filter(|r| can_queue_offline(r.kind))
            .map(|r| format!("  '{}',", r.operation_id)),
    );

    format!(
        "/**
 * Offline support: cache hints and replay queue eligibility per operation
 */
export type OfflineFlags =
  | {{ cacheable: true; ttl: number; version: number }}
  | {{ cacheable: false }};

const CACHE_TTL = new Map<string, number>([
{ttl_rows}]);

const QUEUEABLE_OPERATIONS = new Set<string>([
{queueable}]);

export function getOfflineFlags(operation: string): OfflineFlags {{
  const ttl = CACHE_TTL.get(operation);
  if (ttl === undefined) {{
    return {{ cacheable: false }};
  }}
  return {{ cacheable: true, ttl, version: Date.now() }};
}}

export function canQueueOffline(operation: string): boolean {{
  return QUEUEABLE_OPERATIONS.has(operation);
}}

export function wrapOffline<T extends object>(
  data: T,
  operation: string
): T & {{ {OFFLINE_KEY}: OfflineFlags }} {{
  return {{ ...data, {OFFLINE_KEY}: getOfflineFlags(operation) }};
}}
"
    )
}

fn handler_body(route: &RouteEntry) -> String {
    let op = &route.operation_id;
    let domain = &route.domain;
    match route.kind {
        OperationKind::List => format!(
            "      const params = parsePagination(req.query);
      const result = await {op}(params, deps);
      sendResponse(res, '{op}', toPage(result, params));"
        ),
        OperationKind::Create => format!(
            "      const input = transformRequest<Create{}Input>(req);
      const result = await {op}(input, deps);
      sendCreated(res, '{op}', result);",
            domain.capitalized()
        ),
        OperationKind::Get => format!(
            "      const result = await {op}(req.params.{}, deps);
      sendResponse(res, '{op}', result);",
            domain.path_param()
        ),
    }
}

fn handler(route: &RouteEntry) -> String {
    format!(
        "  /**
   * {method} {path}
   */
  router.{verb}('{local}', async (req: Request, res: Response, next: NextFunction) => {{
    try {{
{body}
    }} catch (error) {{
      next(error);
    }}
  }});
",
        method = route.method,
        path = route.path,
        verb = route.method.as_lower(),
        local = route.express_path(),
        body = handler_body(route),
    )
}

fn controller(domain: &DomainDescriptor, routes: &RouteTable) -> String {
    let name = domain.capitalized();
    let routes: Vec<&RouteEntry> = routes.for_domain(domain.token()).collect();
    let core_imports = comma_list(
        [format!("Create{name}Input"), format!("{name}Deps")]
            .into_iter()
            .chain(routes.iter().map(|r| r.operation_id.clone())),
    );
    let handlers = routes
        .iter()
        .map(|r| handler(r))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "import {{ Router, Request, Response, NextFunction }} from 'express';
import {{ {core_imports} }} from '@corebridge/core';
import {{ transformRequest }} from '../transformers/request.js';
import {{ sendCreated, sendResponse }} from '../transformers/response.js';
import {{ parsePagination, toPage }} from '../extensions/pagination.js';

/**
 * {name} routes, mounted at /{segment}
 */
export function create{name}Router(deps: {name}Deps): Router {{
  const router = Router();

{handlers}
  return router;
}}
",
        segment = domain.route_segment(),
    )
}

fn index(plan: &GenerationPlan, target: &AdapterTarget) -> String {
    let profile: PlatformProfile = target.profile;
    let domains = plan.domains();
    let session = profile.auth == AuthScheme::Session;

    let mut out = String::from("import { Router } from 'express';\n");
    if session {
        out.push_str("import cookieParser from 'cookie-parser';\n");
    }
    if !domains.is_empty() {
        out.push_str(&format!(
            "import {{ {} }} from '@corebridge/core';\n",
            comma_list(domains.iter().map(|d| format!("{}Deps", d.capitalized())))
        ));
    }
    out.push_str(
        "import { authMiddleware } from './middleware/auth.js';\n\
         import { errorHandler } from './middleware/errorHandler.js';\n",
    );
    out.push_str(&lines(domains.iter().map(|d| {
        format!(
            "import {{ create{0}Router }} from './controllers/{0}Controller.js';",
            d.capitalized()
        )
    })));

    out.push_str(
        "\n// Export middleware\n\
         export { authMiddleware } from './middleware/auth.js';\n\
         export { errorHandler } from './middleware/errorHandler.js';\n\
         \n// Export extensions\n",
    );
    out.push_str(&lines(
        profile
            .extensions
            .iter()
            .map(|e| format!("export * from './extensions/{}.js';", e.module_name())),
    ));

    let deps = if domains.is_empty() {
        "Record<string, never>".to_string()
    } else {
        domains
            .iter()
            .map(|d| format!("{}Deps", d.capitalized()))
            .collect::<Vec<_>>()
            .join(" & ")
    };
    out.push_str(&format!("\nexport type AdapterDeps = {deps};\n"));

    let mounts = lines(domains.iter().filter_map(|d| {
        plan.routes().for_domain(d.token()).next().map(|r| {
            format!(
                "  router.use('{}', create{}Router(deps));",
                r.mount_path(),
                d.capitalized()
            )
        })
    }));
    let cookies = if session {
        "  router.use(cookieParser());\n"
    } else {
        ""
    };

    out.push_str(&format!(
        "
/**
 * Create {id} adapter router
 */
export function {factory}(deps: AdapterDeps): Router {{
  const router = Router();

{cookies}  // Apply auth middleware
  router.use(authMiddleware);

  // Mount domain routers
{mounts}
  // Error handler
  router.use(errorHandler);

  return router;
}}
",
        id = target.id,
        factory = router_factory_name(&target.id),
    ));
    out
}

const ERROR_HANDLER: &str = "import type { Request, Response, NextFunction } from 'express';
import { DomainError } from '@corebridge/core';

/**
 * Central error handler
 */
export function errorHandler(
  error: Error,
  _req: Request,
  res: Response,
  _next: NextFunction
): void {
  if (error instanceof DomainError) {
    res.status(error.statusCode).json(error.toJSON());
    return;
  }

  console.error('Unhandled error:', error);
  res.status(500).json({
    code: 'INTERNAL_ERROR',
    message: 'An unexpected error occurred',
  });
}
";

const REQUEST_TRANSFORMER: &str = "import type { Request } from 'express';

/**
 * Transform HTTP request to core input
 */
export function transformRequest<T>(req: Request): T {
  return {
    ...req.body,
    ...req.query,
    ...req.params,
  } as T;
}

/**
 * Extract user ID from authenticated request
 */
export function getUserId(req: Request): string {
  // Assumes auth middleware has attached user
  return (req as any).user?.id ?? '';
}
";
