//! The generation input.
//!
//! A `ProjectConfig` is read once per run and never mutated afterwards. It is
//! deliberately not validated: empty lists, duplicate tokens and oddly shaped
//! tokens all pass through to the generators unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire format requested for the contracts package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractFormat {
    #[default]
    Openapi,
    Graphql,
}

impl ContractFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Openapi => "openapi",
            Self::Graphql => "graphql",
        }
    }
}

impl fmt::Display for ContractFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `contracts` section of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractSettings {
    pub format: ContractFormat,
    /// Emitted verbatim as the document's `openapi` field.
    pub version: String,
}

impl Default for ContractSettings {
    fn default() -> Self {
        Self {
            format: ContractFormat::Openapi,
            version: "3.1.0".into(),
        }
    }
}

/// Domains, adapters and contract settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Ordered domain tokens, e.g. `["user", "project"]`.
    pub domains: Vec<String>,
    /// Ordered platform identifiers, e.g. `["web", "mobile"]`.
    pub adapters: Vec<String>,
    pub contracts: ContractSettings,
}

impl ProjectConfig {
    pub fn new<D, A>(domains: D, adapters: A) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
            adapters: adapters.into_iter().map(Into::into).collect(),
            contracts: ContractSettings::default(),
        }
    }

    pub fn with_contracts(mut self, format: ContractFormat, version: impl Into<String>) -> Self {
        self.contracts = ContractSettings {
            format,
            version: version.into(),
        };
        self
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new(["user", "project"], ["web", "mobile"])
    }
}
