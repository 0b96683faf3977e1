//! The generation plan.
//!
//! Descriptors, the route table and resolved platform profiles are computed
//! once per run and handed to every generator by reference. No generator
//! derives a name or a route on its own.

use tracing::{debug, warn};

use crate::domain::{
    ContractSettings, DomainDescriptor, PlatformProfile, ProjectConfig, RouteTable, policy,
};

/// One configured adapter and the policy set it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterTarget {
    /// The id as configured; names the package and the router factory.
    pub id: String,
    pub profile: PlatformProfile,
}

impl AdapterTarget {
    /// Whether `id` fell back to the default profile.
    pub fn is_fallback(&self) -> bool {
        !policy::platform::is_builtin(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    domains: Vec<DomainDescriptor>,
    routes: RouteTable,
    adapters: Vec<AdapterTarget>,
    contracts: ContractSettings,
}

impl GenerationPlan {
    pub fn new(config: &ProjectConfig) -> Self {
        let domains: Vec<DomainDescriptor> = config
            .domains
            .iter()
            .map(DomainDescriptor::derive)
            .collect();

        for domain in domains.iter().filter(|d| !d.is_well_formed()) {
            warn!(
                domain = %domain,
                "Domain token is not a lowercase identifier; generated names may be invalid"
            );
        }

        let adapters: Vec<AdapterTarget> = config
            .adapters
            .iter()
            .map(|id| AdapterTarget {
                id: id.clone(),
                profile: policy::resolve(id),
            })
            .collect();

        for adapter in adapters.iter().filter(|a| a.is_fallback()) {
            warn!(
                adapter = %adapter.id,
                fallback = %adapter.profile.platform,
                "Unknown adapter; using the default platform profile"
            );
        }

        let routes = RouteTable::build(&domains);
        debug!(
            domains = domains.len(),
            routes = routes.len(),
            adapters = adapters.len(),
            "Generation plan computed"
        );

        Self {
            domains,
            routes,
            adapters,
            contracts: config.contracts.clone(),
        }
    }

    pub fn domains(&self) -> &[DomainDescriptor] {
        &self.domains
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn adapters(&self) -> &[AdapterTarget] {
        &self.adapters
    }

    pub fn contracts(&self) -> &ContractSettings {
        &self.contracts
    }
}
