//! Turn-by-turn instructions for a station transfer.

mod config;
mod instruction;
mod synthesize;

pub use config::{DEFAULT_EPSILON, DEFAULT_PROXIMITY_METERS, SynthesisConfig};
pub use instruction::Instruction;
pub use synthesize::{Synthesizer, instructions_for_collection, synthesize, synthesize_text};
