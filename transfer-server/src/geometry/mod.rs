//! Geometry primitives for pedestrian-scale paths.
//!
//! Haversine distance is the single ground-distance metric used throughout
//! the crate: simplification tolerance, proximity tests and distance totals
//! all go through [`haversine`].

mod angle;
mod distance;
mod simplify;

pub use angle::{Turn, TurnSeverity, TurnSide, relative_angle};
pub use distance::{EARTH_RADIUS_METERS, haversine, path_length};
pub use simplify::{baseline_deviation, simplify};
