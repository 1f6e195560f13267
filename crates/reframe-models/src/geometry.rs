//! Source frame dimensions and target aspect ratios.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pixel dimensions of a source video frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FrameSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl FrameSize {
    /// Create a new frame size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Target aspect ratio for output video.
///
/// Both components must be positive; `PORTRAIT` (9:16) is the default
/// for vertical short-form output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct AspectRatio {
    /// Width component
    pub width: u32,
    /// Height component
    pub height: u32,
}

impl AspectRatio {
    /// Create a new aspect ratio.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns width/height as float.
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Portrait 9:16 (TikTok, Instagram Reels)
    pub const PORTRAIT: AspectRatio = AspectRatio { width: 9, height: 16 };

    /// Square 1:1 (Instagram)
    pub const SQUARE: AspectRatio = AspectRatio { width: 1, height: 1 };

    /// Landscape 16:9 (YouTube)
    pub const LANDSCAPE: AspectRatio = AspectRatio { width: 16, height: 9 };
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::PORTRAIT
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| AspectRatioParseError(s.to_string()))?;
        let width: u32 = w
            .trim()
            .parse()
            .map_err(|_| AspectRatioParseError(s.to_string()))?;
        let height: u32 = h
            .trim()
            .parse()
            .map_err(|_| AspectRatioParseError(s.to_string()))?;
        if width == 0 || height == 0 {
            return Err(AspectRatioParseError(s.to_string()));
        }
        Ok(Self { width, height })
    }
}

#[derive(Debug, Error)]
#[error("Invalid aspect ratio: {0}")]
pub struct AspectRatioParseError(String);
