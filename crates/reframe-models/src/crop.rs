//! Crop windows and dynamic crop filter specs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A pixel rectangle extracted from a source frame.
///
/// Width and height are even (required by common codecs) and constant for
/// the lifetime of a tracking session; the origin always satisfies
/// `x + width <= frame width` and `y + height <= frame height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CropWindow {
    /// Crop width in pixels
    pub width: u32,
    /// Crop height in pixels
    pub height: u32,
    /// Left edge x-coordinate
    pub x: u32,
    /// Top edge y-coordinate
    pub y: u32,
}

impl CropWindow {
    /// Create a new crop window.
    pub fn new(width: u32, height: u32, x: u32, y: u32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }

    /// Right edge x-coordinate.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Horizontal center of the crop.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x as f64 + self.width as f64 / 2.0
    }

    /// Vertical center of the crop.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y as f64 + self.height as f64 / 2.0
    }
}

/// Time-parameterized crop description for a moving subject.
///
/// The expressions are piecewise-constant functions of playback time `t`
/// in FFmpeg expression syntax (`if(lt(t,T),V,...)`), ready for a rendering
/// collaborator to embed into its crop-filter arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DynamicFilterSpec {
    /// Crop width, constant across the clip
    pub crop_width: u32,
    /// Crop height, constant across the clip
    pub crop_height: u32,
    /// x(t) for the crop origin
    pub x_expression: String,
    /// y(t) for the crop origin
    pub y_expression: String,
}
