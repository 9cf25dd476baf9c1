//! Serde model of a place record document.
//!
//! Only the fields the audit reads are modelled. Reference objects keep any
//! extra keys so they can be echoed into the report unchanged.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a string that may be `null` in the source data.
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an identifier that some exports write as a number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Top-level place document as found on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDocument {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    pub place_types: Vec<String>,
    pub features: Vec<Feature>,
    pub locations: Vec<Location>,
    pub names: Vec<Name>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    #[serde(deserialize_with = "nullable_string")]
    pub location_precision: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub accuracy_value: Option<f64>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub provenance: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Location {
    /// Geometry type name, if the location has any geometry at all.
    pub fn geometry_type(&self) -> Option<&str> {
        self.geometry.as_ref().map(|g| g.kind.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Name {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub attested: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub language: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub romanized: String,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Name {
    /// Romanized forms, split on commas and trimmed.
    pub fn romanized_parts(&self) -> Vec<String> {
        self.romanized
            .split(',')
            .map(|r| r.trim().to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Connection {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// A bibliographic reference attached to a place or one of its parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(
        rename = "bibliographicURI",
        default,
        deserialize_with = "nullable_string"
    )]
    pub bibliographic_uri: String,
    #[serde(rename = "accessURI", default, deserialize_with = "nullable_string")]
    pub access_uri: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub citation_detail: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub short_title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub formatted_citation: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
