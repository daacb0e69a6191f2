//! Douglas–Peucker path simplification.
//!
//! The traversal uses an explicit stack of index ranges and a keep mask
//! rather than recursion, so arbitrarily long paths cannot exhaust the call
//! stack. Splits and merges are the same as the textbook recursive form:
//! a range is split at its farthest interior point while that point lies
//! further than `epsilon` from the range's baseline.

use tracing::trace;

use crate::domain::{Coordinate, GeometryError};

use super::distance::haversine;

/// Deviation of `point` from the baseline `start`→`end`.
///
/// This is a hybrid measure: the planar perpendicular distance in degrees,
/// scaled by the great-circle length of the baseline in meters. When the
/// baseline collapses to a single point the direct ground distance is used.
pub fn baseline_deviation(point: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    if start == end {
        return haversine(point, start);
    }

    let (sx, sy) = (start.longitude(), start.latitude());
    let (ex, ey) = (end.longitude(), end.latitude());
    let (px, py) = (point.longitude(), point.latitude());

    let numerator = ((ex - sx) * (sy - py) - (sx - px) * (ey - sy)).abs();
    let chord = (ex - sx).hypot(ey - sy);

    numerator / chord * haversine(start, end)
}

/// Simplify a path, keeping the first and last points.
///
/// Paths of two points or fewer are returned unchanged.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidTolerance`] if `epsilon` is not a
/// positive finite number.
///
/// # Examples
///
/// ```
/// use transfer_server::domain::Coordinate;
/// use transfer_server::geometry::simplify;
///
/// let path = vec![
///     Coordinate::new(8.0, 47.0).unwrap(),
///     Coordinate::new(8.0005, 47.0).unwrap(),
///     Coordinate::new(8.001, 47.0).unwrap(),
/// ];
/// let simplified = simplify(&path, 0.00005).unwrap();
/// assert_eq!(simplified, vec![path[0], path[2]]);
/// ```
pub fn simplify(points: &[Coordinate], epsilon: f64) -> Result<Vec<Coordinate>, GeometryError> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(GeometryError::InvalidTolerance(epsilon));
    }

    if points.len() <= 2 {
        return Ok(points.to_vec());
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0, last)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let (index, dmax) = farthest_interior(points, start, end);
        if dmax > epsilon {
            trace!(start, end, index, dmax, "splitting range");
            keep[index] = true;
            stack.push((index, end));
            stack.push((start, index));
        }
    }

    Ok(points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect())
}

/// Find the first interior point of `start..=end` with the largest deviation.
fn farthest_interior(points: &[Coordinate], start: usize, end: usize) -> (usize, f64) {
    let mut dmax = 0.0;
    let mut index = start;

    for (i, point) in points.iter().enumerate().take(end).skip(start + 1) {
        let d = baseline_deviation(point, &points[start], &points[end]);
        if d > dmax {
            dmax = d;
            index = i;
        }
    }

    (index, dmax)
}
