//! Project configuration (`corebridge.config.json`).
//!
//! [`CoreBridgeConfig`] is loaded once at startup and passed down by value.
//! The CLI layer owns config; the core crate only ever sees the
//! [`ProjectConfig`] projected from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags and `COREBRIDGE_OUTPUT_DIR` (handled at the call-site)
//! 2. Fields present in the config file
//! 3. Built-in defaults, merged field-by-field into nested objects
//!
//! The shape is not validated: whatever tokens the file lists are handed to
//! the generators unchanged.
//!
//! `sourceDir` and `analysis` are reserved for source analysis. No command
//! reads them yet; they are parsed and written back verbatim so existing
//! config files keep their values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use corebridge_core::prelude::{ContractSettings, ProjectConfig};

use crate::error::{CliError, CliResult};

/// `$schema` written by `corebridge init`.
pub const CONFIG_SCHEMA_URL: &str = "https://corebridge.dev/schema/config.json";

/// Contents of `corebridge.config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreBridgeConfig {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Reserved pass-through key.
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub domains: Vec<String>,
    pub adapters: Vec<String>,
    pub contracts: ContractSettings,
    /// Reserved pass-through key.
    pub analysis: AnalysisConfig,
}

/// Source globs for the analysis step. Not consumed by any command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include: vec!["**/*.ts".into()],
            exclude: vec![
                "**/*.test.ts".into(),
                "**/*.spec.ts".into(),
                "**/node_modules/**".into(),
                "**/dist/**".into(),
            ],
        }
    }
}

impl Default for CoreBridgeConfig {
    fn default() -> Self {
        let project = ProjectConfig::default();
        Self {
            schema: None,
            source_dir: PathBuf::from("./src"),
            output_dir: PathBuf::from("./packages"),
            domains: project.domains,
            adapters: project.adapters,
            contracts: project.contracts,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl CoreBridgeConfig {
    /// The file `corebridge init` writes.
    pub fn initial() -> Self {
        Self {
            schema: Some(CONFIG_SCHEMA_URL.into()),
            ..Self::default()
        }
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("Failed to read '{}'", path.display()),
            source: Some(Box::new(e)),
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?;

        tracing::debug!(
            path = %path.display(),
            domains = config.domains.len(),
            adapters = config.adapters.len(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> CliResult<String> {
        serde_json::to_string_pretty(self)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// The slice of the config the generators consume.
    pub fn to_project_config(&self) -> ProjectConfig {
        ProjectConfig {
            domains: self.domains.clone(),
            adapters: self.adapters.clone(),
            contracts: self.contracts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corebridge_core::prelude::ContractFormat;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = CoreBridgeConfig::default();
        assert_eq!(cfg.source_dir, PathBuf::from("./src"));
        assert_eq!(cfg.output_dir, PathBuf::from("./packages"));
        assert_eq!(cfg.domains, ["user", "project"]);
        assert_eq!(cfg.adapters, ["web", "mobile"]);
        assert_eq!(cfg.contracts.version, "3.1.0");
        assert_eq!(cfg.analysis.include, ["**/*.ts"]);
        assert_eq!(cfg.analysis.exclude.len(), 4);
        assert!(cfg.schema.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = CoreBridgeConfig::load(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(cfg, CoreBridgeConfig::default());
    }

    #[test]
    fn nested_objects_merge_field_by_field() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corebridge.config.json");
        std::fs::write(
            &path,
            r#"{
                "domains": ["order"],
                "contracts": { "format": "graphql" },
                "analysis": { "exclude": [] }
            }"#,
        )
        .unwrap();

        let cfg = CoreBridgeConfig::load(&path).unwrap();
        assert_eq!(cfg.domains, ["order"]);
        assert_eq!(cfg.adapters, ["web", "mobile"]);
        assert_eq!(cfg.contracts.format, ContractFormat::Graphql);
        assert_eq!(cfg.contracts.version, "3.1.0");
        assert_eq!(cfg.analysis.include, ["**/*.ts"]);
        assert!(cfg.analysis.exclude.is_empty());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corebridge.config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CoreBridgeConfig::load(&path).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn initial_config_carries_schema() {
        let json = CoreBridgeConfig::initial().to_json().unwrap();
        assert!(json.starts_with("{\n  \"$schema\": \"https://corebridge.dev/schema/config.json\""));
        assert!(json.contains("\"sourceDir\": \"./src\""));
        assert!(json.ends_with("}\n"));

        let back: CoreBridgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CoreBridgeConfig::initial());
    }

    #[test]
    fn reserved_keys_round_trip_without_reaching_generators() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corebridge.config.json");
        std::fs::write(
            &path,
            r#"{
                "sourceDir": "./server",
                "analysis": { "include": ["api/**/*.ts"], "exclude": [] }
            }"#,
        )
        .unwrap();

        let cfg = CoreBridgeConfig::load(&path).unwrap();
        assert_eq!(cfg.source_dir, PathBuf::from("./server"));
        assert_eq!(cfg.to_project_config(), CoreBridgeConfig::default().to_project_config());

        let json = cfg.to_json().unwrap();
        assert!(json.contains("\"sourceDir\": \"./server\""));
        assert!(json.contains("\"api/**/*.ts\""));
        let back: CoreBridgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn projects_generator_input() {
        let cfg = CoreBridgeConfig {
            domains: vec!["invoice".into()],
            adapters: vec!["desktop".into()],
            ..CoreBridgeConfig::default()
        };
        let project = cfg.to_project_config();
        assert_eq!(project.domains, ["invoice"]);
        assert_eq!(project.adapters, ["desktop"]);
        assert_eq!(project.contracts, ContractSettings::default());
    }
}
