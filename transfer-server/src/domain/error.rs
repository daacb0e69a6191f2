//! Domain error types.
//!
//! These errors represent invalid geometry reaching the core computation.
//! Malformed wire features never surface here: the decoder skips them.

/// Errors raised by the geometry and instruction core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A coordinate is non-finite or outside the valid longitude/latitude range
    #[error("invalid geometry: coordinate ({longitude}, {latitude}) {reason}")]
    InvalidGeometry {
        longitude: f64,
        latitude: f64,
        reason: &'static str,
    },

    /// Simplification tolerance is not a positive finite number
    #[error("invalid simplification tolerance: {0}")]
    InvalidTolerance(f64),
}
