//! Wire DTOs for the GeoJSON-like transfer feature collection.
//!
//! These types map directly to the journey-maps transfer response. They use
//! `Option` liberally because the service omits properties that do not apply
//! to a feature, and coordinates stay as raw JSON so that a single malformed
//! feature can be skipped without rejecting the whole collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Top-level feature collection.
///
/// Features are kept as raw JSON values and decoded one at a time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    /// Always "FeatureCollection" in practice; not checked.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// The features, in path order.
    #[serde(default)]
    pub features: Vec<serde_json::Value>,
}

/// A single feature.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureDto {
    /// Geometry; may be null in GeoJSON.
    pub geometry: Option<GeometryDto>,

    /// Property bag; may be null in GeoJSON.
    pub properties: Option<PropertiesDto>,
}

/// Feature geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryDto {
    /// Geometry type, e.g. "Point" or "LineString".
    #[serde(rename = "type")]
    pub kind: String,

    /// Position (Point) or list of positions (LineString).
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

/// Recognized feature properties. Unknown properties are ignored.
///
/// A property of the wrong JSON type is treated as absent, so a bad
/// annotation never costs the feature its geometry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesDto {
    /// Floor a walkway or endpoint lies on.
    #[serde(default, deserialize_with = "lenient")]
    pub floor: Option<i32>,

    /// LIFT, STAIRS, ESCALATOR or RAMP.
    #[serde(default, deserialize_with = "lenient")]
    pub travel_type: Option<String>,

    /// Free-text direction of a vertical transport.
    #[serde(default, deserialize_with = "lenient")]
    pub direction: Option<String>,

    /// Floor a vertical transport departs from.
    #[serde(default, deserialize_with = "lenient")]
    pub source_floor: Option<i32>,

    /// Floor a vertical transport arrives at.
    #[serde(default, deserialize_with = "lenient")]
    pub destination_floor: Option<i32>,

    /// "from" or "to".
    #[serde(default, deserialize_with = "lenient")]
    pub endpoint_type: Option<String>,

    /// Human-readable endpoint name, e.g. "Track 31".
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
}

/// Deserialize an optional property, mapping a type mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(&value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!(%value, error = %e, "ignoring property with unexpected type");
            Ok(None)
        }
    }
}
