//! Corpus discovery and the sequential audit loop.
//!
//! Record files are loaded one at a time, evaluated, and folded into an
//! [`Aggregator`]. A file that cannot be read or parsed is skipped with a
//! warning; only an aggregation inconsistency aborts the run.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::Aggregator;
use crate::config::{AuditConfig, RuleConfig};
use crate::evaluate::evaluate;
use crate::place::Place;
use crate::report::Report;

/// Find every file below `root` whose extension is `extension`, sorted by path.
pub fn discover_records(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Source directory not found: {}", root.display());
    }

    let mut paths = Vec::new();
    discover_recursive(root, extension, &mut paths)?;
    paths.sort();
    tracing::info!("Found {} record files under {}", paths.len(), root.display());

    Ok(paths)
}

/// Walk `dir`. Failing to list `dir` itself is an error; anything unreadable
/// below it is skipped with a warning.
fn discover_recursive(dir: &Path, extension: &str, paths: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if metadata.is_dir() {
            if let Err(e) = discover_recursive(&path, extension, paths) {
                tracing::warn!("Skipping directory {}: {:#}", path.display(), e);
            }
        } else if path.extension().map(|e| e == extension).unwrap_or(false) {
            paths.push(path);
        }
    }

    Ok(())
}

/// A record file that could not be loaded.
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    pub path: PathBuf,
    pub reason: String,
}

/// State of one report run.
pub struct Audit {
    rules: RuleConfig,
    aggregator: Aggregator,
    place_count: usize,
    skipped: Vec<SkippedRecord>,
}

impl Audit {
    pub fn new(rules: RuleConfig) -> Self {
        Self {
            rules,
            aggregator: Aggregator::new(),
            place_count: 0,
            skipped: Vec::new(),
        }
    }

    /// Load and audit one record file.
    ///
    /// Unreadable or malformed files are recorded as skipped and do not count
    /// as places. Errors only on an aggregation inconsistency.
    pub fn process_file(&mut self, path: &Path) -> Result<()> {
        match Place::load(path) {
            Ok(place) => self.process(&place),
            Err(e) => {
                tracing::warn!("Skipping {}: {:#}", path.display(), e);
                self.skipped.push(SkippedRecord {
                    path: path.to_path_buf(),
                    reason: format!("{:#}", e),
                });
                Ok(())
            }
        }
    }

    /// Audit one already loaded place.
    pub fn process(&mut self, place: &Place) -> Result<()> {
        self.place_count += 1;
        let evaluation = evaluate(place, &self.rules);
        self.aggregator
            .absorb(place, evaluation)
            .with_context(|| format!("Inconsistent issue data for place {}", place.id()))
    }

    pub fn place_count(&self) -> usize {
        self.place_count
    }

    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn finish(self) -> Report {
        if !self.skipped.is_empty() {
            tracing::warn!("{} record files could not be loaded", self.skipped.len());
        }
        self.aggregator.finalize(self.place_count)
    }
}

/// Audit every record below `root`.
pub fn audit_corpus(root: &Path, config: &AuditConfig) -> Result<Report> {
    tracing::info!("Crawling for place records: {}", root.display());
    let mut audit = Audit::new(config.rules.clone());
    for path in discover_records(root, &config.corpus.extension)? {
        audit.process_file(&path)?;
    }
    Ok(audit.finish())
}
