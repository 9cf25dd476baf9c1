//! The consolidated report document (`issues.json`).
//!
//! Layout: one sorted array of place IDs per issue kind, a `places` object
//! keyed by place ID with the title and merged detail fields of each flagged
//! place, and a `summary` object with counts.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::place::OwnedReference;
use crate::rules::{Detail, IssueKind, NameSummary};

/// File name of the report inside the destination directory.
pub const REPORT_FILE_NAME: &str = "issues.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub place_count: usize,
    pub problem_count: usize,
    #[serde(flatten)]
    pub counts: BTreeMap<IssueKind, usize>,
}

impl Summary {
    pub fn count(&self, kind: IssueKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub without_zotero: Option<Vec<OwnedReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_invalid_zotero: Option<Vec<OwnedReference>>,
}

/// Everything the report says about one flagged place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<NameSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_way_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<ReferenceDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaceEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Merge the detail recorded for `kind` into this entry.
    pub fn apply(&mut self, kind: IssueKind, detail: Detail) {
        match detail {
            Detail::PlaceTypes(types) => self.place_types = Some(types),
            Detail::Accuracy(bounds) => {
                self.accuracy_min = Some(bounds.min);
                self.accuracy_max = Some(bounds.max);
            }
            Detail::OsmWayIds(ids) => self.osm_way_ids = Some(ids),
            Detail::Names(names) => self.names = Some(names),
            Detail::References(refs) => {
                let details = self.references.get_or_insert_with(Default::default);
                match kind {
                    IssueKind::ReferencesWithInvalidZotero => details.with_invalid_zotero = Some(refs),
                    _ => details.without_zotero = Some(refs),
                }
            }
            Detail::Description(text) => self.description = Some(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub issues: BTreeMap<IssueKind, BTreeSet<String>>,
    pub places: BTreeMap<String, PlaceEntry>,
    pub summary: Summary,
}

impl Report {
    /// Build the document from accumulated issue state.
    ///
    /// `titles` holds every flagged place; details for places missing from it
    /// are dropped with a warning.
    pub fn assemble(
        issues: BTreeMap<IssueKind, BTreeSet<String>>,
        details: BTreeMap<IssueKind, BTreeMap<String, Detail>>,
        titles: BTreeMap<String, String>,
        summary: Summary,
    ) -> Self {
        let mut places: BTreeMap<String, PlaceEntry> = titles
            .into_iter()
            .map(|(pid, title)| (pid, PlaceEntry::new(title)))
            .collect();

        for (kind, by_place) in details {
            for (pid, detail) in by_place {
                match places.get_mut(&pid) {
                    Some(entry) => entry.apply(kind, detail),
                    None => tracing::warn!(place = %pid, %kind, "detail for unretained place"),
                }
            }
        }

        Self {
            issues,
            places,
            summary,
        }
    }

    /// Place IDs flagged with `kind`, sorted.
    pub fn flagged(&self, kind: IssueKind) -> impl Iterator<Item = &str> {
        self.issues
            .get(&kind)
            .into_iter()
            .flat_map(|ids| ids.iter().map(String::as_str))
    }

    pub fn place(&self, pid: &str) -> Option<&PlaceEntry> {
        self.places.get(pid)
    }

    /// Pretty JSON with 4-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .context("Failed to serialize report")?;
        String::from_utf8(buf).context("Report is not valid UTF-8")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse report JSON")
    }

    /// Read a report written by [`Report::write_to_dir`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read report {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid report in {}", path.display()))
    }

    /// Write `issues.json` into `dir`, creating the directory if needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        let path = dir.join(REPORT_FILE_NAME);
        fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        tracing::info!("Wrote report data to {}", dir.display());
        Ok(path)
    }
}
