//! Per-video tracking session.
//!
//! Composes crop geometry, EMA smoothing, and origin clamping behind a
//! single per-frame entry point. One session per video (or per scene);
//! sessions share nothing and may run in parallel, but frames for a given
//! session must be submitted in temporal order.

use crate::config::TrackerConfig;
use crate::error::EngineResult;
use crate::geometry;
use crate::smoother::EmaSmoother;
use reframe_models::{CropWindow, FaceSample, FrameSize};
use tracing::debug;

/// Tracking session that keeps a face centered in a fixed-aspect crop.
pub struct FaceTracker {
    frame: FrameSize,
    smoothing_factor: f64,
    /// Crop dimensions, frozen at construction for the session's lifetime
    crop_width: u32,
    crop_height: u32,
    smoother: EmaSmoother,
}

impl FaceTracker {
    /// Create a tracker for a video with the given frame size.
    ///
    /// Crop dimensions are computed once here and never change afterwards.
    ///
    /// # Errors
    /// `InvalidDimensions` when either frame dimension is zero.
    pub fn new(frame: FrameSize, config: &TrackerConfig) -> EngineResult<Self> {
        let (crop_width, crop_height) = geometry::crop_dimensions(frame, config.aspect)?;

        debug!(
            frame = %frame,
            crop_width,
            crop_height,
            smoothing_factor = config.smoothing_factor,
            "face tracker initialized"
        );

        Ok(Self {
            frame,
            smoothing_factor: config.smoothing_factor,
            crop_width,
            crop_height,
            smoother: EmaSmoother::new(),
        })
    }

    /// Process one frame's face coordinates and return the crop window.
    ///
    /// Smooths the sample, centers the session's fixed crop on the smoothed
    /// point, and clamps the origin to the frame. Total: any input yields a
    /// well-formed window.
    pub fn process_frame(&mut self, sample: FaceSample) -> CropWindow {
        let (cx, cy) = self.smoother.update(sample, self.smoothing_factor);
        let (x, y) = geometry::clamp_origin(cx, cy, self.crop_width, self.crop_height, self.frame);

        CropWindow::new(self.crop_width, self.crop_height, x, y)
    }

    /// Reset smoothing state for a scene change; geometry is untouched.
    ///
    /// Afterwards the session behaves exactly like a freshly constructed
    /// one with the same parameters.
    pub fn reset_smoothing(&mut self) {
        self.smoother.reset();
    }

    /// The session's fixed crop dimensions.
    pub fn crop_size(&self) -> (u32, u32) {
        (self.crop_width, self.crop_height)
    }

    /// Current smoothed face position, if any frame has been processed.
    pub fn smoothed_center(&self) -> Option<(f64, f64)> {
        self.smoother.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_1080p() -> FaceTracker {
        FaceTracker::new(FrameSize::new(1920, 1080), &TrackerConfig::default()).unwrap()
    }

    #[test]
    fn test_crop_dimensions_frozen() {
        let tracker = tracker_1080p();
        assert_eq!(tracker.crop_size(), (606, 1080));
    }

    #[test]
    fn test_first_frame_has_zero_lag() {
        let mut tracker = tracker_1080p();
        let crop = tracker.process_frame(FaceSample::new(960.0, 540.0));

        // Smoothed point equals the raw input exactly
        assert_eq!(tracker.smoothed_center(), Some((960.0, 540.0)));
        assert_eq!(crop, CropWindow::new(606, 1080, 657, 0));
    }

    #[test]
    fn test_smoothing_damps_sudden_jump() {
        let mut tracker = tracker_1080p();

        tracker.process_frame(FaceSample::new(960.0, 540.0));
        let second = tracker.process_frame(FaceSample::new(1200.0, 540.0));
        let third = tracker.process_frame(FaceSample::new(1200.0, 540.0));

        // 0.3 * 1200 + 0.7 * 960 = 1032 -> origin 1032 - 303 = 729
        assert_eq!(second.x, 729);

        // Keeps converging without overshooting the target origin
        assert!(third.x > second.x);
        assert!(third.x < 1200 - 303);
    }

    #[test]
    fn test_corner_inputs_stay_in_bounds() {
        let mut tracker = tracker_1080p();

        for sample in [
            FaceSample::new(0.0, 0.0),
            FaceSample::new(1920.0, 1080.0),
            FaceSample::new(100.0, 100.0),
            FaceSample::new(1800.0, 900.0),
        ] {
            tracker.reset_smoothing();
            let crop = tracker.process_frame(sample);
            assert!(crop.right() <= 1920);
            assert!(crop.bottom() <= 1080);
        }
    }

    #[test]
    fn test_reset_matches_fresh_session() {
        let mut tracker = tracker_1080p();
        tracker.process_frame(FaceSample::new(300.0, 300.0));
        tracker.process_frame(FaceSample::new(400.0, 400.0));

        tracker.reset_smoothing();
        let after_reset = tracker.process_frame(FaceSample::new(1200.0, 540.0));

        let mut fresh = tracker_1080p();
        let fresh_crop = fresh.process_frame(FaceSample::new(1200.0, 540.0));

        assert_eq!(after_reset, fresh_crop);
    }

    #[test]
    fn test_invalid_frame_rejected() {
        let result = FaceTracker::new(FrameSize::new(0, 0), &TrackerConfig::default());
        assert!(result.is_err());
    }
}
