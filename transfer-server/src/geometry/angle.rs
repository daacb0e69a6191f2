//! Relative angles and turn classification.
//!
//! Angles are computed on raw longitude/latitude differences treated as
//! planar vectors. That is not geodesically correct, but the error is
//! negligible at the scale of a station concourse.

use crate::domain::Coordinate;

/// Planar vector between two coordinates, in degrees.
fn vector(from: &Coordinate, to: &Coordinate) -> (f64, f64) {
    (
        to.longitude() - from.longitude(),
        to.latitude() - from.latitude(),
    )
}

/// Unsigned angle in degrees between the vectors p1→p2 and p2→p3.
///
/// The result lies in [0, 180]. Returns 0 when either vector has zero
/// length, since no direction change can be observed.
pub fn relative_angle(p1: &Coordinate, p2: &Coordinate, p3: &Coordinate) -> f64 {
    let (x1, y1) = vector(p1, p2);
    let (x2, y2) = vector(p2, p3);

    let magnitude1 = x1.hypot(y1);
    let magnitude2 = x2.hypot(y2);
    if magnitude1 == 0.0 || magnitude2 == 0.0 {
        return 0.0;
    }

    let cos_angle = ((x1 * x2 + y1 * y2) / (magnitude1 * magnitude2)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees().clamp(0.0, 180.0)
}

/// How far a turn deviates from straight ahead, by magnitude only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSeverity {
    /// [0, 20) degrees
    Straight,
    /// [20, 60) degrees
    Slight,
    /// [60, 120) degrees
    Regular,
    /// [120, 180] degrees
    Sharp,
}

impl TurnSeverity {
    /// Classify an unsigned angle in degrees.
    pub fn classify(angle: f64) -> Self {
        if angle < 20.0 {
            TurnSeverity::Straight
        } else if angle < 60.0 {
            TurnSeverity::Slight
        } else if angle < 120.0 {
            TurnSeverity::Regular
        } else {
            TurnSeverity::Sharp
        }
    }

    /// Direction-free label, e.g. "slight turn".
    pub fn label(&self) -> &'static str {
        match self {
            TurnSeverity::Straight => "continue straight",
            TurnSeverity::Slight => "slight turn",
            TurnSeverity::Regular => "turn",
            TurnSeverity::Sharp => "sharp turn",
        }
    }
}

/// Which way a turn goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSide {
    Left,
    Right,
}

/// A classified change of direction at a path vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub severity: TurnSeverity,
    /// `None` when going straight, or when the path doubles back on itself.
    pub side: Option<TurnSide>,
}

impl Turn {
    /// Classify the turn made at `p2` when walking p1 → p2 → p3.
    ///
    /// Magnitude comes from [`relative_angle`]. The side comes from the sign
    /// of the 2D cross product: counter-clockwise (positive, with longitude
    /// as x and latitude as y) is a left turn.
    pub fn at(p1: &Coordinate, p2: &Coordinate, p3: &Coordinate) -> Self {
        let severity = TurnSeverity::classify(relative_angle(p1, p2, p3));
        if severity == TurnSeverity::Straight {
            return Turn {
                severity,
                side: None,
            };
        }

        let (x1, y1) = vector(p1, p2);
        let (x2, y2) = vector(p2, p3);
        let cross = x1 * y2 - y1 * x2;

        let side = if cross > 0.0 {
            Some(TurnSide::Left)
        } else if cross < 0.0 {
            Some(TurnSide::Right)
        } else {
            None
        };

        Turn { severity, side }
    }

    /// Sentence-initial phrase used in instructions, e.g. "Turn slightly left".
    pub fn phrase(&self) -> &'static str {
        use TurnSeverity::*;
        use TurnSide::*;

        match (self.severity, self.side) {
            (Straight, _) => "Continue straight",
            (Slight, Some(Left)) => "Turn slightly left",
            (Slight, Some(Right)) => "Turn slightly right",
            (Regular, Some(Left)) => "Turn left",
            (Regular, Some(Right)) => "Turn right",
            (Sharp, Some(Left)) => "Turn sharp left",
            (Sharp, Some(Right)) => "Turn sharp right",
            (Sharp, None) => "Turn around",
            (Slight | Regular, None) => "Turn",
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Points within a few hundred meters of Zurich HB
    fn nearby() -> impl Strategy<Value = Coordinate> {
        (-0.003f64..0.003, -0.003f64..0.003)
            .prop_map(|(dx, dy)| Coordinate::new(8.5402 + dx, 47.3782 + dy).unwrap())
    }

    proptest! {
        #[test]
        fn angle_in_bounds(a in nearby(), b in nearby(), c in nearby()) {
            let angle = relative_angle(&a, &b, &c);
            prop_assert!((0.0..=180.0).contains(&angle), "angle {} out of bounds", angle);
        }

        #[test]
        fn degenerate_vectors_give_zero(a in nearby(), b in nearby()) {
            prop_assert_eq!(relative_angle(&a, &a, &b), 0.0);
            prop_assert_eq!(relative_angle(&a, &b, &b), 0.0);
        }

        /// Reversing the walk mirrors the side of the turn
        #[test]
        fn reversal_mirrors_side(a in nearby(), b in nearby(), c in nearby()) {
            let forward = Turn::at(&a, &b, &c);
            let backward = Turn::at(&c, &b, &a);
            let mirrored = forward.side.map(|s| match s {
                TurnSide::Left => TurnSide::Right,
                TurnSide::Right => TurnSide::Left,
            });
            if forward.severity == backward.severity {
                prop_assert_eq!(backward.side, mirrored);
            }
        }
    }
}
