//! Per-frame face samples from an external detector.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Detected face center for one video frame, in source-pixel space.
///
/// Coordinates are unconstrained: a noisy detector may report a center
/// outside the frame bounds, and downstream clamping keeps the resulting
/// crop window well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FaceSample {
    /// Center x-coordinate in pixels
    pub x: f64,
    /// Center y-coordinate in pixels
    pub y: f64,
}

impl FaceSample {
    /// Create a new face sample.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
