//! Conversion from wire DTOs to domain features.
//!
//! Structural problems (missing geometry, wrong coordinate shapes, missing
//! floors on a transport) only cost the offending feature: it is logged and
//! skipped. Coordinates that parse but lie off the globe are a hard error.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    Coordinate, Endpoint, EndpointRole, Feature, GeometryError, TravelType, VerticalTransport,
};

use super::types::{FeatureCollection, FeatureDto, GeometryDto, PropertiesDto};

/// Error while decoding a single feature.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    /// The feature JSON does not have the expected shape
    #[error("undecodable feature: {0}")]
    Decode(String),

    /// The feature has no geometry
    #[error("feature has no geometry")]
    MissingGeometry,

    /// Coordinates are not the expected nesting of numbers
    #[error("malformed coordinates: {0}")]
    MalformedCoordinates(&'static str),

    /// A property required for this kind of feature is absent
    #[error("missing required property: {0}")]
    MissingProperty(&'static str),

    /// Coordinates are numeric but invalid
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Decode every feature of a collection, in order.
///
/// Malformed features are skipped with a warning; unrecognized ones are
/// ignored silently.
///
/// # Errors
///
/// Returns [`GeometryError`] if any contributing feature has a non-finite or
/// out-of-range coordinate.
pub fn decode_features(collection: &FeatureCollection) -> Result<Vec<Feature>, GeometryError> {
    let mut features = Vec::with_capacity(collection.features.len());

    for (position, raw) in collection.features.iter().enumerate() {
        match decode_feature(raw) {
            Ok(decoded) if decoded.is_empty() => debug!(position, "ignoring unrecognized feature"),
            Ok(decoded) => features.extend(decoded),
            Err(FeatureError::Geometry(e)) => return Err(e),
            Err(e) => warn!(position, error = %e, "skipping malformed feature"),
        }
    }

    Ok(features)
}

/// Decode a single raw feature.
///
/// A Point can be both a vertical transport and an endpoint, so this yields
/// up to two features. An empty result means the feature is well formed but
/// plays no part in instruction synthesis (e.g. a Point with neither travel
/// nor endpoint type).
pub fn decode_feature(raw: &Value) -> Result<Vec<Feature>, FeatureError> {
    let dto = FeatureDto::deserialize(raw).map_err(|e| FeatureError::Decode(e.to_string()))?;

    let geometry = dto.geometry.ok_or(FeatureError::MissingGeometry)?;
    let props = dto.properties.unwrap_or_default();

    match geometry.kind.as_str() {
        "LineString" => Ok(vec![decode_walkway(&geometry, &props)?]),
        "Point" => decode_point(&geometry, props),
        _ => Ok(Vec::new()),
    }
}

fn decode_walkway(geometry: &GeometryDto, props: &PropertiesDto) -> Result<Feature, FeatureError> {
    let positions = geometry
        .coordinates
        .as_array()
        .ok_or(FeatureError::MalformedCoordinates("LineString needs a list of positions"))?;

    let path = positions
        .iter()
        .map(parse_position)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Feature::Walkway {
        path,
        floor: props.floor,
    })
}

fn decode_point(geometry: &GeometryDto, props: PropertiesDto) -> Result<Vec<Feature>, FeatureError> {
    // An unknown travel type does not make the feature malformed; it may
    // still be an endpoint.
    let travel_type = props
        .travel_type
        .as_deref()
        .and_then(|t| TravelType::parse(t).ok());
    let role = props.endpoint_type.as_deref().and_then(EndpointRole::parse);

    if travel_type.is_none() && role.is_none() {
        return Ok(Vec::new());
    }

    let coordinate = parse_position(&geometry.coordinates)?;
    let mut features = Vec::with_capacity(2);

    if let Some(kind) = travel_type {
        match decode_transport(coordinate, kind, &props) {
            Ok(transport) => features.push(Feature::Transport(transport)),
            // The endpoint half is still usable
            Err(e) if role.is_some() => {
                warn!(%coordinate, error = %e, "dropping malformed transport of an endpoint")
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(role) = role {
        features.push(Feature::Endpoint(Endpoint {
            role,
            coordinate,
            floor: props.floor.unwrap_or(0),
            label: props.label.unwrap_or_default(),
        }));
    }

    Ok(features)
}

fn decode_transport(
    coordinate: Coordinate,
    kind: TravelType,
    props: &PropertiesDto,
) -> Result<VerticalTransport, FeatureError> {
    let source_floor = props
        .source_floor
        .ok_or(FeatureError::MissingProperty("sourceFloor"))?;
    let destination_floor = props
        .destination_floor
        .ok_or(FeatureError::MissingProperty("destinationFloor"))?;

    Ok(VerticalTransport {
        coordinate,
        kind,
        direction: props.direction.clone(),
        source_floor,
        destination_floor,
    })
}

/// Parse a GeoJSON position `[lon, lat, ...]`. Extra elements (altitude) are ignored.
fn parse_position(value: &Value) -> Result<Coordinate, FeatureError> {
    let position = value
        .as_array()
        .ok_or(FeatureError::MalformedCoordinates("position must be an array"))?;

    match position.as_slice() {
        [lon, lat, ..] => {
            let lon = lon
                .as_f64()
                .ok_or(FeatureError::MalformedCoordinates("longitude must be a number"))?;
            let lat = lat
                .as_f64()
                .ok_or(FeatureError::MalformedCoordinates("latitude must be a number"))?;
            Ok(Coordinate::new(lon, lat)?)
        }
        _ => Err(FeatureError::MalformedCoordinates(
            "position needs at least two numbers",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection(features: Vec<Value>) -> FeatureCollection {
        FeatureCollection {
            kind: Some("FeatureCollection".to_string()),
            features,
        }
    }

    /// Decode a feature that must yield exactly one domain feature.
    fn decode_one(raw: &Value) -> Feature {
        let mut decoded = decode_feature(raw).unwrap();
        assert_eq!(decoded.len(), 1, "expected one feature, got {decoded:?}");
        decoded.remove(0)
    }

    #[test]
    fn decodes_walkway_with_floor() {
        let raw = json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[8.54, 47.37], [8.541, 47.371]] },
            "properties": { "floor": -1 }
        });

        let feature = decode_one(&raw);
        match feature {
            Feature::Walkway { path, floor } => {
                assert_eq!(path.len(), 2);
                assert_eq!(path[1].longitude(), 8.541);
                assert_eq!(floor, Some(-1));
            }
            other => panic!("expected walkway, got {other:?}"),
        }
    }

    #[test]
    fn walkway_without_properties() {
        let raw = json!({
            "geometry": { "type": "LineString", "coordinates": [[8.54, 47.37]] },
            "properties": null
        });

        let feature = decode_one(&raw);
        assert!(matches!(feature, Feature::Walkway { floor: None, .. }));
    }

    #[test]
    fn decodes_transport() {
        let raw = json!({
            "geometry": { "type": "Point", "coordinates": [8.54, 47.37] },
            "properties": {
                "travelType": "LIFT",
                "direction": "up",
                "sourceFloor": 0,
                "destinationFloor": 2
            }
        });

        let feature = decode_one(&raw);
        let Feature::Transport(t) = feature else {
            panic!("expected transport");
        };
        assert_eq!(t.kind, TravelType::Lift);
        assert_eq!(t.direction.as_deref(), Some("up"));
        assert_eq!(t.source_floor, 0);
        assert_eq!(t.destination_floor, 2);
    }

    #[test]
    fn transport_without_floors_is_malformed() {
        let raw = json!({
            "geometry": { "type": "Point", "coordinates": [8.54, 47.37] },
            "properties": { "travelType": "STAIRS", "sourceFloor": 0 }
        });

        assert_eq!(
            decode_feature(&raw),
            Err(FeatureError::MissingProperty("destinationFloor"))
        );
    }

    #[test]
    fn decodes_endpoints_with_defaults() {
        let from = json!({
            "geometry": { "type": "Point", "coordinates": [8.54, 47.37] },
            "properties": { "endpointType": "from", "label": "Track 31", "floor": -1 }
        });
        let to = json!({
            "geometry": { "type": "Point", "coordinates": [8.55, 47.38] },
            "properties": { "endpointType": "to" }
        });

        let Feature::Endpoint(from) = decode_one(&from) else {
            panic!("expected endpoint");
        };
        assert_eq!(from.role, EndpointRole::From);
        assert_eq!(from.label, "Track 31");
        assert_eq!(from.floor, -1);

        let Feature::Endpoint(to) = decode_one(&to) else {
            panic!("expected endpoint");
        };
        assert_eq!(to.role, EndpointRole::To);
        assert_eq!(to.label, "");
        assert_eq!(to.floor, 0);
    }

    #[test]
    fn unknown_travel_type_falls_back_to_endpoint() {
        let raw = json!({
            "geometry": { "type": "Point", "coordinates": [8.54, 47.37] },
            "properties": { "travelType": "WALK", "endpointType": "to", "label": "Track 7" }
        });

        assert!(matches!(
            decode_one(&raw),
            Feature::Endpoint(Endpoint { role: EndpointRole::To, .. })
        ));
    }

    #[test]
    fn point_can_be_transport_and_endpoint() {
        let raw = json!({
            "geometry": { "type": "Point", "coordinates": [8.54, 47.37] },
            "properties": {
                "travelType": "LIFT",
                "sourceFloor": 0,
                "destinationFloor": 2,
                "endpointType": "from",
                "label": "Track 31"
            }
        });

        let decoded = decode_feature(&raw).unwrap();
        assert_eq!(decoded.len(), 2);
        assert!(matches!(&decoded[0], Feature::Transport(t) if t.destination_floor == 2));
        assert!(matches!(&decoded[1], Feature::Endpoint(e) if e.label == "Track 31"));
    }

    #[test]
    fn malformed_transport_keeps_its_endpoint() {
        let raw = json!({
            "geometry": { "type": "Point", "coordinates": [8.55, 47.38] },
            "properties": { "travelType": "STAIRS", "endpointType": "to", "label": "Track 18", "floor": 1 }
        });

        let Feature::Endpoint(to) = decode_one(&raw) else {
            panic!("expected endpoint");
        };
        assert_eq!(to.role, EndpointRole::To);
        assert_eq!(to.label, "Track 18");
        assert_eq!(to.floor, 1);
    }

    #[test]
    fn mistyped_floor_keeps_walkway_geometry() {
        let raw = json!({
            "geometry": { "type": "LineString", "coordinates": [[8.0, 47.0], [8.001, 47.0]] },
            "properties": { "floor": "0" }
        });

        match decode_one(&raw) {
            Feature::Walkway { path, floor } => {
                assert_eq!(path.len(), 2);
                assert_eq!(floor, None);
            }
            other => panic!("expected walkway, got {other:?}"),
        }
    }

    #[test]
    fn mistyped_label_keeps_endpoint() {
        let raw = json!({
            "geometry": { "type": "Point", "coordinates": [8.54, 47.37] },
            "properties": { "endpointType": "from", "label": 5, "floor": 2 }
        });

        let Feature::Endpoint(from) = decode_one(&raw) else {
            panic!("expected endpoint");
        };
        assert_eq!(from.label, "");
        assert_eq!(from.floor, 2);
    }

    #[test]
    fn unrecognized_features_ignored() {
        let plain_point = json!({
            "geometry": { "type": "Point", "coordinates": [8.54, 47.37] },
            "properties": { "name": "kiosk" }
        });
        let polygon = json!({
            "geometry": { "type": "Polygon", "coordinates": [] },
            "properties": {}
        });

        assert_eq!(decode_feature(&plain_point), Ok(Vec::new()));
        assert_eq!(decode_feature(&polygon), Ok(Vec::new()));
    }

    #[test]
    fn malformed_coordinates() {
        let short = json!({
            "geometry": { "type": "LineString", "coordinates": [[8.54]] },
            "properties": {}
        });
        let text = json!({
            "geometry": { "type": "LineString", "coordinates": [["8.54", "47.37"]] },
            "properties": {}
        });
        let flat = json!({
            "geometry": { "type": "LineString", "coordinates": 8.54 },
            "properties": {}
        });

        assert!(matches!(
            decode_feature(&short),
            Err(FeatureError::MalformedCoordinates(_))
        ));
        assert!(matches!(
            decode_feature(&text),
            Err(FeatureError::MalformedCoordinates(_))
        ));
        assert!(matches!(
            decode_feature(&flat),
            Err(FeatureError::MalformedCoordinates(_))
        ));
    }

    #[test]
    fn missing_geometry_and_bad_shape() {
        let no_geometry = json!({ "geometry": null, "properties": { "floor": 0 } });
        assert_eq!(decode_feature(&no_geometry), Err(FeatureError::MissingGeometry));

        let untyped_geometry = json!({ "geometry": { "coordinates": [8.54, 47.37] }, "properties": {} });
        assert!(matches!(decode_feature(&untyped_geometry), Err(FeatureError::Decode(_))));

        let not_an_object = json!("not even an object");
        assert!(matches!(decode_feature(&not_an_object), Err(FeatureError::Decode(_))));
    }

    #[test]
    fn altitude_is_ignored() {
        let raw = json!({
            "geometry": { "type": "Point", "coordinates": [8.54, 47.37, 410.0] },
            "properties": { "endpointType": "from" }
        });
        let Feature::Endpoint(e) = decode_one(&raw) else {
            panic!("expected endpoint");
        };
        assert_eq!(e.coordinate.latitude(), 47.37);
    }

    #[test]
    fn collection_skips_malformed_keeps_order() {
        let features = vec![
            json!({ "geometry": null, "properties": {} }),
            json!({
                "geometry": { "type": "LineString", "coordinates": [[8.54, 47.37], [8.55, 47.37]] },
                "properties": { "floor": 0 }
            }),
            json!("not even an object"),
            json!({
                "geometry": { "type": "Point", "coordinates": [8.55, 47.37] },
                "properties": { "endpointType": "to", "label": "Track 18" }
            }),
        ];

        let decoded = decode_features(&collection(features)).unwrap();
        assert_eq!(decoded.len(), 2);
        assert!(matches!(decoded[0], Feature::Walkway { .. }));
        assert!(matches!(decoded[1], Feature::Endpoint(_)));
    }

    #[test]
    fn out_of_range_coordinate_is_fatal() {
        let features = vec![json!({
            "geometry": { "type": "LineString", "coordinates": [[8.54, 47.37], [8.55, 147.37]] },
            "properties": {}
        })];

        let err = decode_features(&collection(features)).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry { .. }));
    }

    #[test]
    fn deserializes_collection_json() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [8.5, 47.3] },
                  "properties": { "endpointType": "from", "label": "Track 1" } }
            ]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.kind.as_deref(), Some("FeatureCollection"));
        assert_eq!(decode_features(&collection).unwrap().len(), 1);
    }
}
