//! FFmpeg crop-filter string rendering.
//!
//! Thin formatting layer over the synthesized crop descriptions, for
//! callers that embed the result directly into an FFmpeg filter graph.

use crate::config::TrackerConfig;
use crate::error::EngineResult;
use crate::geometry::crop_dimensions;
use reframe_models::{CropWindow, DynamicFilterSpec, FrameSize};

/// Render a static crop window as `crop=W:H:X:Y`.
pub fn static_crop_filter(crop: &CropWindow) -> String {
    format!("crop={}:{}:{}:{}", crop.width, crop.height, crop.x, crop.y)
}

/// Render a dynamic crop spec as `crop=W:H:x(t):y(t)`.
pub fn dynamic_crop_filter(spec: &DynamicFilterSpec) -> String {
    format!(
        "crop={}:{}:{}:{}",
        spec.crop_width, spec.crop_height, spec.x_expression, spec.y_expression
    )
}

/// Frame-centered crop at the configured aspect, for videos where no face
/// was detected or tracking was skipped.
pub fn centered_crop_filter(frame: FrameSize, config: &TrackerConfig) -> EngineResult<String> {
    let (crop_width, crop_height) = crop_dimensions(frame, config.aspect)?;
    let x = (frame.width - crop_width) / 2;
    let y = (frame.height - crop_height) / 2;

    Ok(format!("crop={}:{}:{}:{}", crop_width, crop_height, x, y))
}
