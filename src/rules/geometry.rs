//! Rules about location precision, positional accuracy and imported geometry.

use super::{Detail, Finding};
use crate::config::RuleConfig;
use crate::place::Place;

/// Rough precision everywhere, yet the place is not typed `unlocated`.
pub fn rough_not_unlocated(place: &Place, _config: &RuleConfig) -> Option<Finding> {
    if place.rough() && !place.unlocated() {
        let types = place.place_types().into_iter().collect();
        Some(Finding::with_detail(Detail::PlaceTypes(types)))
    } else {
        None
    }
}

/// Best available accuracy is still at or above the configured threshold.
pub fn poor_accuracy(place: &Place, config: &RuleConfig) -> Option<Finding> {
    let bounds = place.accuracy()?;
    (bounds.min >= config.accuracy_threshold)
        .then(|| Finding::with_detail(Detail::Accuracy(bounds)))
}

/// No locations, or a location without an accuracy value.
pub fn missing_accuracy(place: &Place, _config: &RuleConfig) -> Option<Finding> {
    if place.accuracy().is_some() {
        return None;
    }
    tracing::debug!(
        place = %place.id(),
        locations = place.locations().len(),
        "accuracy undefined"
    );
    Some(Finding::flag())
}

/// Locations imported from an OSM Way that only kept a point.
pub fn bad_osm_way(place: &Place, config: &RuleConfig) -> Option<Finding> {
    let ids = place.bad_osm_way_ids(&config.osm_way_marker);
    if ids.is_empty() {
        None
    } else {
        Some(Finding::with_detail(Detail::OsmWayIds(ids)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::AccuracyBounds;
    use crate::rules::testing::{base, place};
    use serde_json::json;

    #[test]
    fn test_rough_not_unlocated_reports_sorted_types() {
        let mut v = base();
        v["features"] = json!([{"properties": {"location_precision": "rough"}}]);
        v["placeTypes"] = json!(["villa", "settlement", "villa"]);
        let finding = rough_not_unlocated(&place(v), &RuleConfig::default()).unwrap();
        assert_eq!(
            finding.detail,
            Some(Detail::PlaceTypes(vec![
                "settlement".to_string(),
                "villa".to_string()
            ]))
        );
    }

    #[test]
    fn test_rough_unlocated_is_fine() {
        let mut v = base();
        v["features"] = json!([{"properties": {"location_precision": "rough"}}]);
        v["placeTypes"] = json!(["unlocated"]);
        assert!(rough_not_unlocated(&place(v), &RuleConfig::default()).is_none());
    }

    #[test]
    fn test_mixed_precision_is_not_rough() {
        let mut v = base();
        v["features"] = json!([
            {"properties": {"location_precision": "rough"}},
            {"properties": {"location_precision": "precise"}}
        ]);
        assert!(rough_not_unlocated(&place(v), &RuleConfig::default()).is_none());
    }

    #[test]
    fn test_poor_accuracy_at_threshold() {
        let mut v = base();
        v["locations"] = json!([
            {"id": "a", "accuracy_value": 1000.0},
            {"id": "b", "accuracy_value": 5000.0}
        ]);
        let finding = poor_accuracy(&place(v), &RuleConfig::default()).unwrap();
        assert_eq!(
            finding.detail,
            Some(Detail::Accuracy(AccuracyBounds {
                min: 1000.0,
                max: 5000.0
            }))
        );
    }

    #[test]
    fn test_poor_accuracy_below_threshold() {
        let mut v = base();
        v["locations"] = json!([
            {"id": "a", "accuracy_value": 999.9},
            {"id": "b", "accuracy_value": 5000.0}
        ]);
        assert!(poor_accuracy(&place(v), &RuleConfig::default()).is_none());
    }

    #[test]
    fn test_poor_accuracy_respects_configured_threshold() {
        let config = RuleConfig {
            accuracy_threshold: 5.0,
            ..RuleConfig::default()
        };
        assert!(poor_accuracy(&place(base()), &config).is_some());
    }

    #[test]
    fn test_missing_accuracy_and_poor_accuracy_are_exclusive() {
        let mut v = base();
        v["locations"] = json!([]);
        let p = place(v);
        let config = RuleConfig::default();
        assert!(missing_accuracy(&p, &config).is_some());
        assert!(poor_accuracy(&p, &config).is_none());

        let p = place(base());
        assert!(missing_accuracy(&p, &config).is_none());
    }

    #[test]
    fn test_bad_osm_way_lists_location_ids() {
        let mut v = base();
        v["locations"] = json!([
            {"id": "osm-way-1", "accuracy_value": 10.0, "provenance": "OpenStreetMap (Way 12, version 3)", "geometry": {"type": "Point"}},
            {"id": "osm-way-2", "accuracy_value": 10.0, "provenance": "OpenStreetMap (Way 13, version 1)", "geometry": {"type": "Polygon"}}
        ]);
        let finding = bad_osm_way(&place(v), &RuleConfig::default()).unwrap();
        assert_eq!(
            finding.detail,
            Some(Detail::OsmWayIds(vec!["osm-way-1".to_string()]))
        );
    }
}
