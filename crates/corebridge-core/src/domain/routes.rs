//! The canonical route table.
//!
//! Each domain contributes exactly three routes, always in this order:
//!
//! | Kind   | Method | Path                     | operationId          |
//! |--------|--------|--------------------------|----------------------|
//! | List   | GET    | `/{segment}`             | `list{Name}s`        |
//! | Create | POST   | `/{segment}`             | `create{Name}`       |
//! | Get    | GET    | `/{segment}/{{param}}`   | `get{Name}`          |
//!
//! The OpenAPI document, the core use-case modules, and every adapter's
//! controllers and router mounts are all projected from one [`RouteTable`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::naming::DomainDescriptor;

/// HTTP method of a route entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }

    /// Lower-case form used as an OpenAPI path-item key and an express
    /// router method (`router.get`, `router.post`).
    pub const fn as_lower(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three operations every domain exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    List,
    Create,
    Get,
}

impl OperationKind {
    /// Per-domain order of the route table.
    pub const ALL: [OperationKind; 3] = [Self::List, Self::Create, Self::Get];

    pub const fn method(self) -> HttpMethod {
        match self {
            Self::List | Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
        }
    }

    /// Whether the route addresses a single item (`/{segment}/{param}`).
    pub const fn is_item(self) -> bool {
        matches!(self, Self::Get)
    }

    /// Whether the operation changes server state.
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Create)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Get => "get",
        }
    }

    /// `operationId` of this operation for `domain`.
    pub fn operation_id(self, domain: &DomainDescriptor) -> String {
        match self {
            Self::List => format!("list{}", domain.plural_capitalized()),
            Self::Create => format!("create{}", domain.capitalized()),
            Self::Get => format!("get{}", domain.capitalized()),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(method, path, operationId)` triple of the API surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: HttpMethod,
    pub path: String,
    pub operation_id: String,
    pub kind: OperationKind,
    pub domain: DomainDescriptor,
}

impl RouteEntry {
    fn new(kind: OperationKind, domain: &DomainDescriptor) -> Self {
        let collection = collection_path(domain);
        let path = if kind.is_item() {
            format!("{collection}/{{{}}}", domain.path_param())
        } else {
            collection
        };

        Self {
            method: kind.method(),
            path,
            operation_id: kind.operation_id(domain),
            kind,
            domain: domain.clone(),
        }
    }

    /// The collection path this route is mounted under, e.g. `/users`.
    pub fn mount_path(&self) -> String {
        collection_path(&self.domain)
    }

    /// Path relative to [`Self::mount_path`] in express syntax.
    ///
    /// `/users` becomes `/` and `/users/{userId}` becomes `/:userId`.
    pub fn express_path(&self) -> String {
        if self.kind.is_item() {
            format!("/:{}", self.domain.path_param())
        } else {
            "/".to_string()
        }
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.method, self.path, self.operation_id)
    }
}

fn collection_path(domain: &DomainDescriptor) -> String {
    format!("/{}", domain.route_segment())
}

/// Ordered route entries for a domain list.
///
/// Ordered by input domain order, then by [`OperationKind::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build the table: three entries per domain.
    pub fn build(domains: &[DomainDescriptor]) -> Self {
        let entries = domains
            .iter()
            .flat_map(|domain| {
                OperationKind::ALL
                    .into_iter()
                    .map(move |kind| RouteEntry::new(kind, domain))
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries belonging to one domain token, in per-domain order.
    pub fn for_domain<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a RouteEntry> + 'a {
        self.entries.iter().filter(move |e| e.domain.token() == token)
    }

    pub fn operation_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.operation_id.as_str()).collect()
    }

    /// Distinct collection paths in domain order; one router mount each.
    pub fn mount_paths(&self) -> Vec<String> {
        let mut mounts: Vec<String> = Vec::new();
        for entry in &self.entries {
            let mount = entry.mount_path();
            if !mounts.contains(&mount) {
                mounts.push(mount);
            }
        }
        mounts
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
