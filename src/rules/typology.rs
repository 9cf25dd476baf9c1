//! Place-type vocabulary rules.

use super::{Detail, Finding};
use crate::config::RuleConfig;
use crate::place::Place;

/// The place uses at least one deprecated type.
///
/// The detail lists all of the place's types, not only the deprecated ones.
pub fn bad_place_type(place: &Place, config: &RuleConfig) -> Option<Finding> {
    let types = place.place_types();
    let deprecated = config
        .deprecated_place_types
        .iter()
        .any(|t| types.contains(t));

    deprecated.then(|| Finding::with_detail(Detail::PlaceTypes(types.into_iter().collect())))
}
