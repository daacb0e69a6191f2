//! The closed set of path features the instruction synthesizer understands.

use super::coordinate::Coordinate;
use super::endpoint::Endpoint;
use super::transport::VerticalTransport;

/// A decoded path feature.
///
/// The wire format is an open property bag; decoding dispatches on which
/// properties are present and keeps only the cases below.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// A walkable line, optionally annotated with the floor it lies on.
    Walkway {
        path: Vec<Coordinate>,
        floor: Option<i32>,
    },

    /// A vertical transport point.
    Transport(VerticalTransport),

    /// A named start or destination point.
    Endpoint(Endpoint),
}
