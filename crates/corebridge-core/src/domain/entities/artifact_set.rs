use std::fmt;

use crate::domain::entities::common::RelativePath;

/// The package an artifact set belongs to.
///
/// Directory names are fixed: `core`, `contracts`, `adapter-{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageKind {
    Core,
    Contracts,
    /// Carries the adapter id exactly as configured.
    Adapter(String),
}

impl PackageKind {
    pub fn directory_name(&self) -> String {
        match self {
            Self::Core => "core".to_string(),
            Self::Contracts => "contracts".to_string(),
            Self::Adapter(id) => format!("adapter-{id}"),
        }
    }

    /// npm package name written into `package.json`.
    pub fn npm_name(&self) -> String {
        format!("@corebridge/{}", self.directory_name())
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.directory_name())
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: RelativePath,
    pub content: String,
}

impl Artifact {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Every file produced by one generator invocation, in emission order.
///
/// Paths are relative to the package directory. Sets never reference one
/// another; agreement between packages is purely structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    package: PackageKind,
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new(package: PackageKind) -> Self {
        Self {
            package,
            artifacts: Vec::new(),
        }
    }

    /// Append a file. A later file with the same path replaces the earlier
    /// one at write time.
    pub fn add(&mut self, path: impl Into<RelativePath>, content: impl Into<String>) {
        self.artifacts.push(Artifact {
            path: path.into(),
            content: content.into(),
        });
    }

    pub fn with(mut self, path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        self.add(path, content);
        self
    }

    pub fn package(&self) -> &PackageKind {
        &self.package
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    /// Content of the artifact at `path`, if present.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .rev()
            .find(|a| a.path.as_str() == path)
            .map(|a| a.content.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.artifacts.iter().map(Artifact::size).sum()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}
