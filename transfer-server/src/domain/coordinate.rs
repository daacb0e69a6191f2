//! Geographic coordinate types.

use std::fmt;

use super::error::GeometryError;

/// Number of decimal places kept by [`CoordKey`] (about one centimetre).
const KEY_DECIMALS: i32 = 7;

/// A validated (longitude, latitude) pair in decimal degrees.
///
/// Both components are finite and inside their geographic range, so every
/// `Coordinate` is safe to feed into distance and angle computations.
///
/// # Examples
///
/// ```
/// use transfer_server::domain::Coordinate;
///
/// let zurich_hb = Coordinate::new(8.5402, 47.3782).unwrap();
/// assert_eq!(zurich_hb.longitude(), 8.5402);
///
/// // Latitude outside [-90, 90] is rejected
/// assert!(Coordinate::new(8.54, 97.0).is_err());
///
/// // NaN is rejected
/// assert!(Coordinate::new(f64::NAN, 47.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating that it lies on the globe.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeometryError> {
        let invalid = |reason| GeometryError::InvalidGeometry {
            longitude,
            latitude,
            reason,
        };

        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(invalid("is not finite"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("has longitude outside [-180, 180]"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("has latitude outside [-90, 90]"));
        }

        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Canonical lookup key for this coordinate.
    pub fn key(&self) -> CoordKey {
        CoordKey::from(*self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

/// Hashable key for coordinate lookups.
///
/// Components are rounded to a fixed number of decimal places and stored as
/// integers, so two renderings of the same position (e.g. `7.4` and
/// `7.400000000000001`) share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey {
    lon_e7: i64,
    lat_e7: i64,
}

impl From<Coordinate> for CoordKey {
    fn from(coord: Coordinate) -> Self {
        let scale = 10f64.powi(KEY_DECIMALS);
        Self {
            lon_e7: (coord.longitude * scale).round() as i64,
            lat_e7: (coord.latitude * scale).round() as i64,
        }
    }
}
