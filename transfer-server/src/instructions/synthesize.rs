//! Turn-by-turn instruction synthesis.
//!
//! The synthesizer simplifies the walking path of a transfer, then walks it
//! segment by segment. After each segment it checks whether a vertical
//! transport was reached (which moves the traveller to the transport's
//! destination floor) and otherwise whether the path itself changed floor.

use tracing::{debug, trace};

use crate::domain::{Feature, GeometryError};
use crate::features::{FeatureCollection, decode_features};
use crate::geometry::{Turn, haversine, simplify};
use crate::walkable::WalkableRoute;

use super::config::SynthesisConfig;
use super::instruction::{Instruction, whole_meters};

/// Produces instructions for decoded transfer features.
pub struct Synthesizer<'a> {
    config: &'a SynthesisConfig,
}

impl<'a> Synthesizer<'a> {
    /// Create a synthesizer with the given configuration.
    pub fn new(config: &'a SynthesisConfig) -> Self {
        Self { config }
    }

    /// Synthesize instructions for a list of features.
    ///
    /// Missing endpoints produce announcements with an empty label on
    /// floor 0. A path with fewer than two points produces no segment
    /// instructions.
    pub fn synthesize(&self, features: &[Feature]) -> Result<Vec<Instruction>, GeometryError> {
        let route = WalkableRoute::from_features(features);
        self.synthesize_route(&route)
    }

    fn synthesize_route(&self, route: &WalkableRoute) -> Result<Vec<Instruction>, GeometryError> {
        let path = simplify(&route.path, self.config.epsilon)?;
        debug!(
            input_points = route.path.len(),
            simplified_points = path.len(),
            transports = route.transports.len(),
            "simplified walking path"
        );

        let (start_label, start_floor) = route
            .from
            .as_ref()
            .map(|e| (e.label.clone(), e.floor))
            .unwrap_or_default();
        let (end_label, end_floor) = route
            .to
            .as_ref()
            .map(|e| (e.label.clone(), e.floor))
            .unwrap_or_default();

        let mut instructions = Vec::with_capacity(path.len() * 2 + 3);
        let mut current_floor = start_floor;
        let mut total_meters = 0.0;

        instructions.push(Instruction::Start {
            label: start_label,
            floor: current_floor,
        });

        for (i, segment) in path.windows(2).enumerate() {
            let (start, end) = (&segment[0], &segment[1]);
            let meters = haversine(start, end);
            total_meters += meters;

            let instruction = if i == 0 {
                Instruction::WalkStraight {
                    meters: whole_meters(meters),
                }
            } else {
                Instruction::Turn {
                    turn: Turn::at(&path[i - 1], start, end),
                    meters: whole_meters(meters),
                }
            };
            trace!(segment = i, meters, %instruction, "segment");
            instructions.push(instruction);

            if let Some(transport) = route
                .transports
                .first_within(end, self.config.proximity_meters)
            {
                debug!(
                    segment = i,
                    kind = %transport.kind,
                    from = transport.source_floor,
                    to = transport.destination_floor,
                    "reached vertical transport"
                );
                instructions.push(Instruction::InFrontOf {
                    kind: transport.kind,
                });
                instructions.push(Instruction::TakeTransport {
                    kind: transport.kind,
                    direction: transport.direction.clone(),
                    source_floor: transport.source_floor,
                    destination_floor: transport.destination_floor,
                });
                current_floor = transport.destination_floor;
                continue;
            }

            if let Some(floor) = route.floors.get(end)
                && floor != current_floor
            {
                debug!(segment = i, from = current_floor, to = floor, "floor change");
                instructions.push(Instruction::FloorChange { floor });
                current_floor = floor;
            }
        }

        instructions.push(Instruction::Arrive {
            label: end_label,
            floor: end_floor,
        });
        instructions.push(Instruction::TotalDistance {
            meters: whole_meters(total_meters),
        });

        Ok(instructions)
    }
}

/// Synthesize instructions with the given configuration.
pub fn synthesize(
    features: &[Feature],
    config: &SynthesisConfig,
) -> Result<Vec<Instruction>, GeometryError> {
    Synthesizer::new(config).synthesize(features)
}

/// Synthesize instructions and render them as sentences.
pub fn synthesize_text(
    features: &[Feature],
    config: &SynthesisConfig,
) -> Result<Vec<String>, GeometryError> {
    Ok(synthesize(features, config)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Decode a wire feature collection and render its instructions.
pub fn instructions_for_collection(
    collection: &FeatureCollection,
    config: &SynthesisConfig,
) -> Result<Vec<String>, GeometryError> {
    let features = decode_features(collection)?;
    synthesize_text(&features, config)
}
