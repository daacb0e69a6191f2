//! Transfer feature collections as delivered by the journey-maps service.
//!
//! The wire format is GeoJSON with an open property bag. This module decodes
//! it into the closed [`Feature`](crate::domain::Feature) set, dispatching on
//! which properties are present:
//!
//! - any LineString is a walkway (`floor` optional)
//! - a Point with `travelType` LIFT/STAIRS/ESCALATOR/RAMP is a vertical transport
//! - a Point with `endpointType` from/to is a named endpoint
//!
//! A Point may be both a transport and an endpoint.

mod convert;
mod types;

pub use convert::{FeatureError, decode_feature, decode_features};
pub use types::{FeatureCollection, FeatureDto, GeometryDto, PropertiesDto};
