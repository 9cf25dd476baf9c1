//! Configuration for audit runs.
//!
//! Every setting has a default, so a run needs no configuration file at all.
//! A YAML file may override any subset:
//!
//! ```yaml
//! rules:
//!   accuracy_threshold: 500.0
//!   deprecated_place_types: [church, fort]
//! corpus:
//!   extension: json
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AuditConfig {
    /// Load configuration from a YAML file, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file means "all defaults"
        let config: AuditConfig = if content.trim().is_empty() {
            AuditConfig::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse config YAML")?
        };

        config.validate()?;

        Ok(config)
    }

    /// Override the accuracy threshold, re-validating the result.
    pub fn with_accuracy_threshold(mut self, threshold: f64) -> Result<Self> {
        self.rules.accuracy_threshold = threshold;
        self.rules.validate()?;
        Ok(self)
    }
}
