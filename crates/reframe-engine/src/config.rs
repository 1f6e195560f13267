//! Configuration for the reframing engine.

use reframe_models::AspectRatio;
use serde::{Deserialize, Serialize};

/// Configuration for a tracking session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// EMA smoothing factor in (0, 1].
    ///
    /// Weights the newest sample; lower values are smoother but respond
    /// slower to real subject motion. 0.3 balances responsiveness and
    /// jitter suppression for most talking-head content.
    pub smoothing_factor: f64,

    /// Target output aspect ratio (default: 9:16 portrait).
    pub aspect: AspectRatio,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: 0.3,
            aspect: AspectRatio::PORTRAIT,
        }
    }
}

impl TrackerConfig {
    /// Responsive configuration for fast-moving subjects.
    ///
    /// Follows detections more closely at the cost of passing through
    /// more detector jitter.
    pub fn responsive() -> Self {
        Self {
            smoothing_factor: 0.5,
            ..Default::default()
        }
    }

    /// Cinematic configuration for slow, deliberate camera motion.
    pub fn cinematic() -> Self {
        Self {
            smoothing_factor: 0.15,
            ..Default::default()
        }
    }
}
