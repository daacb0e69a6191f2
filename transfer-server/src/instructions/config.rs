//! Configuration for instruction synthesis.

/// Default simplification tolerance, tuned for indoor pedestrian paths.
pub const DEFAULT_EPSILON: f64 = 0.00005;

/// Default distance within which a vertical transport counts as reached.
pub const DEFAULT_PROXIMITY_METERS: f64 = 5.0;

/// Tuning parameters for instruction synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisConfig {
    /// Douglas–Peucker tolerance, in degree-meters (planar deviation in
    /// degrees scaled by the baseline length in meters).
    pub epsilon: f64,

    /// A segment that ends strictly closer than this to a vertical
    /// transport triggers the transport announcement.
    pub proximity_meters: f64,
}

impl SynthesisConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(epsilon: f64, proximity_meters: f64) -> Self {
        Self {
            epsilon,
            proximity_meters,
        }
    }

    /// Set the simplification tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the transport proximity threshold.
    pub fn with_proximity_meters(mut self, meters: f64) -> Self {
        self.proximity_meters = meters;
        self
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            proximity_meters: DEFAULT_PROXIMITY_METERS,
        }
    }
}
