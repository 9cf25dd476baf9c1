use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::model::{Location, Name, PlaceDocument, Reference};
use super::zotero::{self, ZoteroStatus};

/// Place type marking a record with no known location.
pub const UNLOCATED: &str = "unlocated";

/// Returned by [`Place::accuracy_min`] and [`Place::accuracy_max`] when the
/// record has no usable accuracy values.
pub const NO_ACCURACY: f64 = 0.0;

/// Horizontal accuracy range over all of a place's locations, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyBounds {
    #[serde(rename = "accuracy_min")]
    pub min: f64,
    #[serde(rename = "accuracy_max")]
    pub max: f64,
}

/// A reference together with the key of the sub-object that owns it.
///
/// Serialized as a two-element array `[owner, reference]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedReference(pub String, pub Reference);

impl OwnedReference {
    pub fn owner(&self) -> &str {
        &self.0
    }

    pub fn reference(&self) -> &Reference {
        &self.1
    }
}

/// One loaded place record. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct Place {
    doc: PlaceDocument,
}

impl Place {
    /// Load a place record from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read place record {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse place record {}", path.display()))
    }

    /// Parse a place record from JSON text.
    pub fn parse(content: &str) -> Result<Self> {
        let doc: PlaceDocument =
            serde_json::from_str(content).context("Invalid place record JSON")?;
        Ok(Self { doc })
    }

    pub fn id(&self) -> &str {
        &self.doc.id
    }

    pub fn title(&self) -> &str {
        &self.doc.title
    }

    pub fn description(&self) -> &str {
        &self.doc.description
    }

    /// Deduplicated place types, in sorted order.
    pub fn place_types(&self) -> BTreeSet<String> {
        self.doc.place_types.iter().cloned().collect()
    }

    pub fn unlocated(&self) -> bool {
        self.doc.place_types.iter().any(|t| t == UNLOCATED)
    }

    pub fn feature_count(&self) -> usize {
        self.doc.features.len()
    }

    fn precision_classes(&self) -> BTreeSet<&str> {
        self.doc
            .features
            .iter()
            .map(|f| f.properties.location_precision.as_str())
            .collect()
    }

    /// Every feature is `precise`. False for an empty feature list.
    pub fn precise(&self) -> bool {
        self.precision_classes() == BTreeSet::from(["precise"])
    }

    /// Every feature is `rough`. False for an empty feature list.
    pub fn rough(&self) -> bool {
        self.precision_classes() == BTreeSet::from(["rough"])
    }

    pub fn locations(&self) -> &[Location] {
        &self.doc.locations
    }

    /// Accuracy range over all locations.
    ///
    /// `None` when there are no locations or any location lacks an accuracy value.
    pub fn accuracy(&self) -> Option<AccuracyBounds> {
        let mut values = self.doc.locations.iter().map(|l| l.accuracy_value);
        let first = values.next()??;
        let mut bounds = AccuracyBounds {
            min: first,
            max: first,
        };
        for value in values {
            let value = value?;
            bounds.min = bounds.min.min(value);
            bounds.max = bounds.max.max(value);
        }
        Some(bounds)
    }

    pub fn accuracy_min(&self) -> f64 {
        match self.accuracy() {
            Some(bounds) => bounds.min,
            None => {
                tracing::debug!(place = %self.id(), "no accuracy values, using sentinel");
                NO_ACCURACY
            }
        }
    }

    pub fn accuracy_max(&self) -> f64 {
        match self.accuracy() {
            Some(bounds) => bounds.max,
            None => {
                tracing::debug!(place = %self.id(), "no accuracy values, using sentinel");
                NO_ACCURACY
            }
        }
    }

    /// IDs of locations imported from an OSM Way that only kept a point geometry.
    pub fn bad_osm_way_ids(&self, provenance_marker: &str) -> Vec<String> {
        self.doc
            .locations
            .iter()
            .filter(|l| {
                l.provenance.starts_with(provenance_marker) && l.geometry_type() == Some("Point")
            })
            .map(|l| l.id.clone())
            .collect()
    }

    pub fn names(&self) -> &[Name] {
        &self.doc.names
    }

    pub fn name_count(&self) -> usize {
        self.doc.names.len()
    }

    /// At least one name attested from `start_year` onwards.
    pub fn has_modern_name(&self, start_year: i64) -> bool {
        self.doc
            .names
            .iter()
            .any(|n| n.start.is_some_and(|start| start >= start_year))
    }

    /// At least one name has no attested form.
    pub fn names_romanized_only(&self) -> bool {
        self.doc.names.iter().any(|n| n.attested.is_empty())
    }

    /// All references of the place and its locations, names and connections,
    /// keyed by their owner.
    pub fn references(&self) -> Vec<OwnedReference> {
        let pid = self.id();
        let mut owned: Vec<OwnedReference> = self
            .doc
            .references
            .iter()
            .map(|r| OwnedReference(pid.to_string(), r.clone()))
            .collect();

        let mut push_sub = |subkind: &str, sub_id: &str, refs: &[Reference]| {
            let key = format!("{}:{}:{}", pid, subkind, sub_id);
            owned.extend(refs.iter().map(|r| OwnedReference(key.clone(), r.clone())));
        };
        for l in &self.doc.locations {
            push_sub("location", &l.id, &l.references);
        }
        for n in &self.doc.names {
            push_sub("name", &n.id, &n.references);
        }
        for c in &self.doc.connections {
            push_sub("connection", &c.id, &c.references);
        }

        owned
    }

    fn references_where(
        &self,
        prefix: &str,
        wanted: impl Fn(ZoteroStatus) -> bool,
    ) -> Vec<OwnedReference> {
        self.references()
            .into_iter()
            .filter(|r| wanted(zotero::classify(&r.1.bibliographic_uri, prefix)))
            .collect()
    }

    pub fn references_without_zotero(&self, prefix: &str) -> Vec<OwnedReference> {
        self.references_where(prefix, |s| !s.is_zotero())
    }

    pub fn references_with_zotero(&self, prefix: &str) -> Vec<OwnedReference> {
        self.references_where(prefix, ZoteroStatus::is_zotero)
    }

    pub fn references_with_invalid_zotero(&self, prefix: &str) -> Vec<OwnedReference> {
        self.references_where(prefix, |s| s == ZoteroStatus::Invalid)
    }
}
