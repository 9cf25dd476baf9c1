//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::place::zotero::DEFAULT_ZOTERO_PREFIX;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

/// Place type term IDs retired from the vocabulary. These are term IDs, not
/// display labels ("church" was "church or monastery" on the atlas maps).
pub const DEPRECATED_PLACE_TYPES: &[&str] = &[
    "church",
    "fort",
    "labeled-feature",
    "mine",
    "numbered feature",
    "plaza",
    "province",
    "temple",
    "unknown",
    "wall",
];

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_accuracy_threshold, f64, 1000.0); // meters
default_fn!(default_modern_name_start, i64, 1500);
default_fn!(
    default_osm_way_marker,
    String,
    "OpenStreetMap (Way".to_string()
);
default_fn!(
    default_zotero_prefix,
    String,
    DEFAULT_ZOTERO_PREFIX.to_string()
);
default_fn!(
    default_deprecated_place_types,
    Vec<String>,
    DEPRECATED_PLACE_TYPES.iter().map(|s| s.to_string()).collect()
);
default_fn!(
    default_description_markers,
    Vec<String>,
    vec!["cited: BAtlas".to_string()]
);
default_fn!(
    default_legacy_descriptions,
    Vec<String>,
    vec!["a place from the tavo index".to_string()]
);
default_fn!(default_extension, String, "json".to_string());
default_fn!(
    default_place_uri_base,
    String,
    "https://pleiades.stoa.org/places/".to_string()
);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Parameters of the quality rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleConfig {
    /// Minimum accuracy (meters) at or above which a precise place is flagged (default: 1000)
    #[serde(default = "default_accuracy_threshold")]
    pub accuracy_threshold: f64,
    /// Place type term IDs that should no longer be used
    #[serde(default = "default_deprecated_place_types")]
    pub deprecated_place_types: Vec<String>,
    /// First year counted as "modern" for names (default: 1500)
    #[serde(default = "default_modern_name_start")]
    pub modern_name_start: i64,
    /// Provenance prefix of locations imported from an OSM Way
    #[serde(default = "default_osm_way_marker")]
    pub osm_way_marker: String,
    /// Prefix identifying Zotero bibliographic URIs
    #[serde(default = "default_zotero_prefix")]
    pub zotero_prefix: String,
    /// Substrings marking a description as inadequate (case-sensitive)
    #[serde(default = "default_description_markers")]
    pub inadequate_description_markers: Vec<String>,
    /// Whole descriptions (compared trimmed and lower-cased) that are legacy boilerplate
    #[serde(default = "default_legacy_descriptions")]
    pub legacy_descriptions: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            accuracy_threshold: default_accuracy_threshold(),
            deprecated_place_types: default_deprecated_place_types(),
            modern_name_start: default_modern_name_start(),
            osm_way_marker: default_osm_way_marker(),
            zotero_prefix: default_zotero_prefix(),
            inadequate_description_markers: default_description_markers(),
            legacy_descriptions: default_legacy_descriptions(),
        }
    }
}

/// Corpus discovery settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// File extension of record files, without the dot (default: json)
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

/// CSV export settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Base of the display URI written next to each place ID
    #[serde(default = "default_place_uri_base")]
    pub place_uri_base: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            place_uri_base: default_place_uri_base(),
        }
    }
}
