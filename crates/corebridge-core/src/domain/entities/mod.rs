pub mod artifact_set;
pub mod common;
pub mod project_config;

pub use artifact_set::{Artifact, ArtifactSet, PackageKind};
pub use common::RelativePath;
pub use project_config::{ContractFormat, ContractSettings, ProjectConfig};
