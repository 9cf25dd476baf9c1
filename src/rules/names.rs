//! Naming completeness rules.

use super::{Detail, Finding, NameSummary};
use crate::config::RuleConfig;
use crate::place::Place;

/// Some name has no attested (original script) form.
///
/// The detail summarizes every name of the place, not only the romanized-only ones.
pub fn names_romanized_only(place: &Place, _config: &RuleConfig) -> Option<Finding> {
    if !place.names_romanized_only() {
        return None;
    }

    let names = place
        .names()
        .iter()
        .map(|n| NameSummary(n.attested.clone(), n.language.clone(), n.romanized_parts()))
        .collect();
    Some(Finding::with_detail(Detail::Names(names)))
}

/// Named, located place without any name in use since the modern cutoff.
pub fn missing_modern_name(place: &Place, config: &RuleConfig) -> Option<Finding> {
    let missing = place.name_count() > 0
        && !place.has_modern_name(config.modern_name_start)
        && !place.unlocated();
    missing.then(Finding::flag)
}
