use serde_json::{json, Value};

/// Builds place record JSON. The default record is clean: one precise
/// feature, one accurate point location, one attested modern name.
pub struct PlaceBuilder {
    value: Value,
}

impl PlaceBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            value: json!({
                "id": id,
                "title": format!("Place {}", id),
                "placeTypes": ["settlement"],
                "features": [{"properties": {"location_precision": "precise"}}],
                "locations": [{
                    "id": "loc-1",
                    "accuracy_value": 20.0,
                    "provenance": "Barrington Atlas",
                    "geometry": {"type": "Point", "coordinates": [12.5, 41.9]},
                    "references": []
                }],
                "names": [{
                    "id": "name-1",
                    "attested": "Roma",
                    "language": "la",
                    "romanized": "Roma, Rome",
                    "start": 1600,
                    "references": []
                }],
                "connections": [],
                "references": [],
                "description": "An ancient settlement."
            }),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.value["title"] = title.into();
        self
    }

    pub fn place_types(mut self, types: &[&str]) -> Self {
        self.value["placeTypes"] = json!(types);
        self
    }

    pub fn precision(mut self, classes: &[&str]) -> Self {
        self.value["features"] = classes
            .iter()
            .map(|c| json!({"properties": {"location_precision": c}}))
            .collect();
        self
    }

    pub fn no_locations(mut self) -> Self {
        self.value["locations"] = json!([]);
        self
    }

    pub fn location(mut self, id: &str, accuracy: Option<f64>, provenance: &str) -> Self {
        let location = json!({
            "id": id,
            "accuracy_value": accuracy,
            "provenance": provenance,
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
            "references": []
        });
        push(&mut self.value["locations"], location);
        self
    }

    pub fn locations(mut self, locations: Value) -> Self {
        self.value["locations"] = locations;
        self
    }

    pub fn names(mut self, names: Value) -> Self {
        self.value["names"] = names;
        self
    }

    pub fn reference(mut self, bibliographic_uri: &str, short_title: &str) -> Self {
        push(
            &mut self.value["references"],
            json!({
                "bibliographicURI": bibliographic_uri,
                "accessURI": "",
                "citationDetail": "p. 1",
                "shortTitle": short_title,
                "formattedCitation": format!("{}, p. 1", short_title),
            }),
        );
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.value["description"] = description.into();
        self
    }

    pub fn build(self) -> Value {
        self.value
    }
}

fn push(array: &mut Value, item: Value) {
    if let Value::Array(items) = array {
        items.push(item);
    }
}
