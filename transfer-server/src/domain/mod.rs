//! Domain types for the transfer guide.
//!
//! This module contains the core domain model types that represent
//! validated path data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod coordinate;
mod endpoint;
mod error;
mod feature;
mod transport;

pub use coordinate::{CoordKey, Coordinate};
pub use endpoint::{Endpoint, EndpointRole};
pub use error::GeometryError;
pub use feature::Feature;
pub use transport::{TravelType, UnknownTravelType, VerticalTransport};
