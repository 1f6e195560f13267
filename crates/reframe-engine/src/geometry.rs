//! Crop geometry: fixed crop dimensions and origin clamping.
//!
//! Pure functions shared by the tracker. Dimensions are computed once per
//! session; the clamp runs per frame.

use crate::error::{EngineError, EngineResult};
use reframe_models::{AspectRatio, FrameSize};

/// Compute crop dimensions that fit within the frame at the target aspect.
///
/// Fits by width first; if the implied height exceeds the frame, fits by
/// height instead. Fractional pixels are truncated, then any odd dimension
/// loses one more pixel so both are even (required by many codecs).
///
/// # Errors
/// `InvalidDimensions` when either frame dimension is zero.
pub fn crop_dimensions(frame: FrameSize, aspect: AspectRatio) -> EngineResult<(u32, u32)> {
    if frame.width == 0 || frame.height == 0 {
        return Err(EngineError::invalid_dimensions(frame.width, frame.height));
    }

    let target_aspect = aspect.ratio();

    // Try fitting by width first
    let mut crop_width = frame.width;
    let mut crop_height = (crop_width as f64 / target_aspect) as u32;

    // If height exceeds frame bounds, fit by height instead
    if crop_height > frame.height {
        crop_height = frame.height;
        crop_width = (crop_height as f64 * target_aspect) as u32;
    }

    // Ensure even dimensions
    crop_width -= crop_width % 2;
    crop_height -= crop_height % 2;

    Ok((crop_width, crop_height))
}

/// Map a smoothed center point to a crop origin bounded to the frame.
///
/// The origin is truncated toward zero before clamping, which biases crops
/// slightly toward the top-left corner; kept for reproducibility rather
/// than rounding. If the frame is smaller than the crop (outside
/// [`crop_dimensions`]' contract) the upper bound collapses to 0.
pub fn clamp_origin(
    cx: f64,
    cy: f64,
    crop_width: u32,
    crop_height: u32,
    frame: FrameSize,
) -> (u32, u32) {
    let max_x = frame.width.saturating_sub(crop_width) as f64;
    let max_y = frame.height.saturating_sub(crop_height) as f64;

    let x = (cx - crop_width as f64 / 2.0).trunc().clamp(0.0, max_x);
    let y = (cy - crop_height as f64 / 2.0).trunc().clamp(0.0, max_y);

    (x as u32, y as u32)
}
