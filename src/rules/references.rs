//! Bibliographic reference rules.

use super::{Detail, Finding};
use crate::config::RuleConfig;
use crate::place::{OwnedReference, Place};

fn references_finding(refs: Vec<OwnedReference>) -> Option<Finding> {
    if refs.is_empty() {
        None
    } else {
        Some(Finding::with_detail(Detail::References(refs)))
    }
}

pub fn references_without_zotero(place: &Place, config: &RuleConfig) -> Option<Finding> {
    references_finding(place.references_without_zotero(&config.zotero_prefix))
}

pub fn references_with_invalid_zotero(place: &Place, config: &RuleConfig) -> Option<Finding> {
    references_finding(place.references_with_invalid_zotero(&config.zotero_prefix))
}
