//! Package generators.
//!
//! Each generator is a pure function from a [`GenerationPlan`] to one
//! [`ArtifactSet`]. They share nothing at runtime and can run in any order;
//! consistency between packages comes from the plan they all read.
//!
//! [`GenerationPlan`]: crate::application::plan::GenerationPlan
//! [`ArtifactSet`]: crate::domain::ArtifactSet

pub mod adapter_package;
pub mod contracts_package;
pub mod core_package;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value, json};

use crate::application::ApplicationError;
use crate::domain::PackageKind;
use crate::error::CoreBridgeResult;

/// Version stamped into every generated `package.json`.
pub const PACKAGE_VERSION: &str = "0.1.0";

pub const TYPESCRIPT_VERSION: &str = "^5.3.0";
pub const NODE_TYPES_VERSION: &str = "^20.10.0";

/// `package.json` of a generated package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    name: String,
    version: &'static str,
    description: String,
    main: &'static str,
    types: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<&'static str>,
    scripts: BTreeMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    dependencies: BTreeMap<String, &'static str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    dev_dependencies: BTreeMap<String, &'static str>,
    license: &'static str,
}

impl PackageManifest {
    pub fn new(package: &PackageKind, description: impl Into<String>) -> Self {
        Self {
            name: package.npm_name(),
            version: PACKAGE_VERSION,
            description: description.into(),
            main: "dist/index.js",
            types: "dist/index.d.ts",
            files: Vec::new(),
            scripts: BTreeMap::from([("build", "tsc"), ("clean", "rm -rf dist")]),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
            license: "MIT",
        }
    }

    pub fn files(mut self, files: &[&'static str]) -> Self {
        self.files = files.to_vec();
        self
    }

    pub fn dependency(mut self, name: impl Into<String>, version: &'static str) -> Self {
        self.dependencies.insert(name.into(), version);
        self
    }

    pub fn dev_dependency(mut self, name: impl Into<String>, version: &'static str) -> Self {
        self.dev_dependencies.insert(name.into(), version);
        self
    }

    /// The TypeScript toolchain every package builds with.
    pub fn typescript(self) -> Self {
        self.dev_dependency("typescript", TYPESCRIPT_VERSION)
            .dev_dependency("@types/node", NODE_TYPES_VERSION)
    }

    pub fn render(&self) -> CoreBridgeResult<String> {
        to_pretty_json(self, "package.json")
    }
}

/// Shared `tsconfig.json`.
pub fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "NodeNext",
            "moduleResolution": "NodeNext",
            "declaration": true,
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"]
    })
}

/// Two-space indented JSON with a trailing newline.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(
    value: &T,
    artifact: &str,
) -> CoreBridgeResult<String> {
    let mut out = serde_json::to_string_pretty(value)
        .map_err(|e| ApplicationError::rendering(artifact, e))?;
    out.push('\n');
    Ok(out)
}

pub(crate) fn to_yaml<T: Serialize + ?Sized>(value: &T, artifact: &str) -> CoreBridgeResult<String> {
    serde_yaml::to_string(value).map_err(|e| ApplicationError::rendering(artifact, e).into())
}

/// `a, b, c` on one line, or nothing.
pub(crate) fn comma_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per item, each terminated by `\n`.
pub(crate) fn lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| format!("{}\n", s.as_ref()))
        .collect()
}
