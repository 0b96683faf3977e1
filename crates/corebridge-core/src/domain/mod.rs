//! Core domain layer for CoreBridge.
//!
//! Pure naming, routing, schema and platform-policy logic. All I/O is handled
//! via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Total**: Every operation is defined for every input; nothing here fails
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod naming;
pub mod policy;
pub mod routes;
pub mod schema;

// Re-exports for convenience
pub use entities::{
    Artifact, ArtifactSet, ContractFormat, ContractSettings, PackageKind, ProjectConfig,
    RelativePath,
};
pub use naming::{DomainDescriptor, capitalize};
pub use policy::{
    AuthScheme, EnvelopeStyle, Extension, PaginationStyle, Platform, PlatformProfile,
};
pub use routes::{HttpMethod, OperationKind, RouteEntry, RouteTable};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module consistency
    // ========================================================================

    #[test]
    fn route_table_and_schema_agree_on_names() {
        let domains: Vec<_> = ["order"].into_iter().map(DomainDescriptor::derive).collect();
        let routes = RouteTable::build(&domains);
        let doc = schema::openapi_document("3.1.0", &domains, &routes);

        for entry in &routes {
            let op = &doc["paths"][entry.path.as_str()][entry.method.as_lower()];
            assert_eq!(op["operationId"], entry.operation_id.as_str());
        }
    }

    #[test]
    fn adapter_package_named_after_requested_id() {
        let profile = policy::resolve("desktop");
        let pkg = PackageKind::Adapter("desktop".into());

        assert_eq!(profile.platform, Platform::Web);
        assert_eq!(pkg.directory_name(), "adapter-desktop");
        assert_eq!(format!("create{}Router", capitalize("desktop")), "createDesktopRouter");
    }
}
