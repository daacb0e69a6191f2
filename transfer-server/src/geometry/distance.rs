//! Great-circle distance.

use crate::domain::Coordinate;

/// Earth radius used for every ground distance in this crate.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates (haversine).
///
/// Coordinate differences are taken as absolute values, which makes the
/// result bit-for-bit symmetric in its arguments.
pub fn haversine(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).abs().to_radians();
    let d_lon = (b.longitude() - a.longitude()).abs().to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();

    // Rounding can push h a hair above 1 for near-antipodal points.
    let h = (sin_lat * sin_lat
        + a.latitude().to_radians().cos() * b.latitude().to_radians().cos() * sin_lon * sin_lon)
        .min(1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Total length in meters of a polyline.
pub fn path_length(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|w| haversine(&w[0], &w[1])).sum()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-180.0f64..=180.0, -90.0f64..=90.0).prop_map(|(lon, lat)| Coordinate::new(lon, lat).unwrap())
    }

    proptest! {
        #[test]
        fn symmetric(a in coordinate(), b in coordinate()) {
            prop_assert_eq!(haversine(&a, &b), haversine(&b, &a));
        }

        #[test]
        fn identity(a in coordinate()) {
            prop_assert_eq!(haversine(&a, &a), 0.0);
        }

        /// Never negative and never more than half the circumference
        #[test]
        fn bounded(a in coordinate(), b in coordinate()) {
            let d = haversine(&a, &b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_METERS + 1e-6);
        }
    }
}
