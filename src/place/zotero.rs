//! Zotero URI classification for bibliographic references.
//!
//! A reference either points outside Zotero altogether, or points into the
//! Zotero library and then has to match the strict item URI shape used by
//! the gazetteer's bibliography group.

use regex::Regex;
use std::sync::OnceLock;

/// Default prefix identifying a Zotero bibliographic URI.
pub const DEFAULT_ZOTERO_PREFIX: &str = "https://www.zotero.org/";

/// Group paths are `/groups/2533`, `/groups/pleiades` or `/groups/2533/pleiades`;
/// items are 8 upper-case alphanumerics, optionally under `itemKey/`.
const ZOTERO_ITEM_PATTERN: &str =
    r"^https://www\.zotero\.org/groups/(?:2533|pleiades|2533/pleiades)/items/(?:itemKey/)?[A-Z0-9]{8}/?$";

fn item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ZOTERO_ITEM_PATTERN).expect("zotero item pattern compiles"))
}

/// How a reference's bibliographic URI relates to the Zotero library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoteroStatus {
    /// URI does not start with the Zotero prefix (including empty URIs).
    Absent,
    /// Zotero URI matching the strict item pattern.
    Valid,
    /// Zotero URI that fails the strict item pattern.
    Invalid,
}

impl ZoteroStatus {
    pub fn is_zotero(self) -> bool {
        !matches!(self, ZoteroStatus::Absent)
    }
}

/// True when `uri` is a well-formed Zotero item URI.
pub fn is_valid_item_uri(uri: &str) -> bool {
    item_regex().is_match(uri)
}

/// Classify a bibliographic URI against `prefix` and the strict item pattern.
pub fn classify(uri: &str, prefix: &str) -> ZoteroStatus {
    if !uri.starts_with(prefix) {
        ZoteroStatus::Absent
    } else if is_valid_item_uri(uri) {
        ZoteroStatus::Valid
    } else {
        ZoteroStatus::Invalid
    }
}
