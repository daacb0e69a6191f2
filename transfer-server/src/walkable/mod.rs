//! The walkable route through a station.
//!
//! A transfer is delivered as a flat list of features. This module gathers
//! them into what the instruction synthesizer walks: one concatenated
//! walking path plus lookups for floors and vertical transports along it,
//! and the named start and end points.

use std::collections::HashMap;

use crate::domain::{CoordKey, Coordinate, Endpoint, EndpointRole, Feature, VerticalTransport};
use crate::geometry::haversine;

/// Floor lookup for path coordinates.
///
/// Keys are canonical [`CoordKey`]s, so a coordinate taken from the
/// simplified path finds the floor recorded for the same input coordinate.
#[derive(Debug, Clone, Default)]
pub struct FloorIndex {
    floors: HashMap<CoordKey, i32>,
}

impl FloorIndex {
    /// Record the floor of a coordinate, replacing any earlier entry.
    pub fn insert(&mut self, coordinate: &Coordinate, floor: i32) {
        self.floors.insert(coordinate.key(), floor);
    }

    /// Get the floor recorded for a coordinate.
    pub fn get(&self, coordinate: &Coordinate) -> Option<i32> {
        self.floors.get(&coordinate.key()).copied()
    }
}

/// Vertical transports in the order they were first seen.
///
/// A transport at an already-known position replaces the earlier one in
/// place, so scanning order stays the order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct TransportIndex {
    entries: Vec<VerticalTransport>,
    positions: HashMap<CoordKey, usize>,
}

impl TransportIndex {
    /// Add a transport.
    pub fn insert(&mut self, transport: VerticalTransport) {
        let key = transport.coordinate.key();
        match self.positions.get(&key) {
            Some(&i) => self.entries[i] = transport,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push(transport);
            }
        }
    }

    /// First transport, in index order, strictly closer than `radius_meters`.
    pub fn first_within(
        &self,
        coordinate: &Coordinate,
        radius_meters: f64,
    ) -> Option<&VerticalTransport> {
        self.entries
            .iter()
            .find(|t| haversine(&t.coordinate, coordinate) < radius_meters)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Everything the synthesizer needs from one feature collection.
#[derive(Debug, Clone, Default)]
pub struct WalkableRoute {
    /// Walkway coordinates concatenated in feature order.
    pub path: Vec<Coordinate>,
    pub floors: FloorIndex,
    pub transports: TransportIndex,
    /// Start point; the last `from` endpoint wins if several are present.
    pub from: Option<Endpoint>,
    /// Destination; the last `to` endpoint wins if several are present.
    pub to: Option<Endpoint>,
}

impl WalkableRoute {
    /// Gather a route from decoded features in a single pass.
    pub fn from_features(features: &[Feature]) -> Self {
        let mut route = Self::default();

        for feature in features {
            match feature {
                Feature::Walkway { path, floor } => {
                    if let Some(floor) = floor {
                        for coordinate in path {
                            route.floors.insert(coordinate, *floor);
                        }
                    }
                    route.path.extend_from_slice(path);
                }
                Feature::Transport(transport) => route.transports.insert(transport.clone()),
                Feature::Endpoint(endpoint) => match endpoint.role {
                    EndpointRole::From => route.from = Some(endpoint.clone()),
                    EndpointRole::To => route.to = Some(endpoint.clone()),
                },
            }
        }

        route
    }
}
