//! Navigation instructions and their wording.

use std::fmt;

use crate::domain::TravelType;
use crate::geometry::Turn;

/// One step of turn-by-turn guidance.
///
/// `Display` renders the complete English sentence shown to the traveller.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Where the walk begins.
    Start { label: String, floor: i32 },

    /// The first segment of the walk.
    WalkStraight { meters: i64 },

    /// Any later segment, with the turn made before it.
    Turn { turn: Turn, meters: i64 },

    /// A vertical transport has been reached.
    InFrontOf { kind: TravelType },

    /// Ride or climb to another floor.
    TakeTransport {
        kind: TravelType,
        direction: Option<String>,
        source_floor: i32,
        destination_floor: i32,
    },

    /// The path moved to another floor without an explicit transport.
    FloorChange { floor: i32 },

    /// Where the walk ends.
    Arrive { label: String, floor: i32 },

    /// Length of the whole walk.
    TotalDistance { meters: i64 },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Start { label, floor } => {
                write!(f, "You are at {label} on floor {floor}.")
            }
            Instruction::WalkStraight { meters } => {
                write!(f, "Walk straight for about {meters} meters.")
            }
            Instruction::Turn { turn, meters } => {
                write!(f, "{} and continue for about {meters} meters.", turn.phrase())
            }
            Instruction::InFrontOf { kind } => {
                write!(f, "You are in front of {} {kind}.", kind.article())
            }
            Instruction::TakeTransport {
                kind,
                direction,
                source_floor,
                destination_floor,
            } => {
                write!(f, "Take the {kind}")?;
                if let Some(direction) = direction.as_deref().filter(|d| !d.is_empty()) {
                    write!(f, " {direction}")?;
                }
                write!(f, " from floor {source_floor} to floor {destination_floor}.")
            }
            Instruction::FloorChange { floor } => write!(f, "You are now on floor {floor}."),
            Instruction::Arrive { label, floor } => {
                write!(f, "You have arrived at {label} on floor {floor}.")
            }
            Instruction::TotalDistance { meters } => {
                write!(f, "Total distance: approximately {meters} meters.")
            }
        }
    }
}

/// Round a distance to whole meters, halves away from zero.
pub(crate) fn whole_meters(meters: f64) -> i64 {
    meters.round() as i64
}
