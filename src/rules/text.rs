//! Title and description rules.

use super::{Detail, Finding};
use crate::config::RuleConfig;
use crate::place::Place;

/// A `?` in the title marks an uncertain identification.
pub fn question_mark_title(place: &Place, _config: &RuleConfig) -> Option<Finding> {
    place.title().contains('?').then(Finding::flag)
}

pub fn empty_description(place: &Place, _config: &RuleConfig) -> Option<Finding> {
    let description = place.description();
    description
        .trim()
        .is_empty()
        .then(|| Finding::with_detail(Detail::Description(description.to_string())))
}

/// Pro-forma descriptions left over from legacy imports.
///
/// Never fires for an empty description.
pub fn inadequate_description(place: &Place, config: &RuleConfig) -> Option<Finding> {
    let description = place.description();
    let normalized = description.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let inadequate = config
        .inadequate_description_markers
        .iter()
        .any(|m| description.contains(m.as_str()))
        || config
            .legacy_descriptions
            .iter()
            .any(|l| l.trim().to_lowercase() == normalized);

    inadequate.then(|| Finding::with_detail(Detail::Description(description.to_string())))
}
