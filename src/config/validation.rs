//! Validation logic for configuration.

use anyhow::Result;

use super::defaults::{CorpusConfig, RuleConfig};
use super::AuditConfig;

impl AuditConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        self.corpus.validate()
    }
}

impl RuleConfig {
    /// Validate rule parameters
    pub fn validate(&self) -> Result<()> {
        if !self.accuracy_threshold.is_finite() || self.accuracy_threshold <= 0.0 {
            anyhow::bail!(
                "rules.accuracy_threshold must be a positive number, got {}",
                self.accuracy_threshold
            );
        }

        if self.zotero_prefix.trim().is_empty() {
            anyhow::bail!("rules.zotero_prefix must not be empty");
        }

        if self.osm_way_marker.is_empty() {
            anyhow::bail!("rules.osm_way_marker must not be empty");
        }

        Ok(())
    }
}

impl CorpusConfig {
    /// Validate corpus settings
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            anyhow::bail!(
                "corpus.extension must be a bare extension like 'json', got '{}'",
                self.extension
            );
        }

        Ok(())
    }
}
