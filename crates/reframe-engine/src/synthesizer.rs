//! Crop synthesis from a clip's worth of face samples.
//!
//! Two strategies, mirroring how clips are actually rendered:
//! - **Static**: one fixed rectangle centered on the average face position.
//!   Cheap to encode; right for talking heads that barely move.
//! - **Dynamic**: a piecewise-constant time function per axis, stepping
//!   through the smoothed position of every frame. Output length is O(n) in
//!   the sample count, so callers with very long clips should prefer static
//!   mode or chunk the clip.

use crate::config::TrackerConfig;
use crate::error::{EngineError, EngineResult};
use crate::tracker::FaceTracker;
use reframe_models::{CropWindow, DynamicFilterSpec, FaceSample, FrameSize};
use tracing::debug;

/// Compute a single static crop centered on the average face position.
///
/// The mean is unweighted and order-irrelevant; the mean point runs through
/// a fresh tracker so the result obeys the same geometry and clamping as
/// per-frame tracking.
///
/// # Errors
/// `EmptyInput` when no samples are supplied; `InvalidDimensions` for a
/// zero frame dimension.
pub fn static_crop(
    samples: &[FaceSample],
    frame: FrameSize,
    config: &TrackerConfig,
) -> EngineResult<CropWindow> {
    if samples.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let n = samples.len() as f64;
    let mean_x = samples.iter().map(|s| s.x).sum::<f64>() / n;
    let mean_y = samples.iter().map(|s| s.y).sum::<f64>() / n;

    let mut tracker = FaceTracker::new(frame, config)?;
    let crop = tracker.process_frame(FaceSample::new(mean_x, mean_y));

    debug!(samples = samples.len(), crop_x = crop.x, crop_y = crop.y, "static crop synthesized");

    Ok(crop)
}

/// Compute a dynamic crop spec stepping through every sample in order.
///
/// Frame `i`'s crop origin holds for `t` in `[i/fps, (i+1)/fps)`. Crop
/// dimensions are constant across the clip and taken from the first window.
///
/// # Errors
/// `EmptyInput` when no samples are supplied; `InvalidDimensions` for a
/// zero frame dimension.
pub fn dynamic_crop(
    samples: &[FaceSample],
    frame: FrameSize,
    fps: f64,
    config: &TrackerConfig,
) -> EngineResult<DynamicFilterSpec> {
    if samples.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut tracker = FaceTracker::new(frame, config)?;
    let windows: Vec<CropWindow> = samples
        .iter()
        .map(|sample| tracker.process_frame(*sample))
        .collect();

    let x_values: Vec<u32> = windows.iter().map(|w| w.x).collect();
    let y_values: Vec<u32> = windows.iter().map(|w| w.y).collect();

    let spec = DynamicFilterSpec {
        crop_width: windows[0].width,
        crop_height: windows[0].height,
        x_expression: piecewise_expression(&x_values, fps),
        y_expression: piecewise_expression(&y_values, fps),
    };

    debug!(
        frames = windows.len(),
        crop_width = spec.crop_width,
        crop_height = spec.crop_height,
        "dynamic crop spec synthesized"
    );

    Ok(spec)
}

/// Render per-frame values as a nested piecewise-constant time expression.
///
/// `if(lt(t,T1),V0,if(lt(t,T2),V1,...Vn))` with boundary timestamps at
/// 3-decimal precision and the last frame as a bare value. Built as a
/// right-to-left fold so stack depth stays constant for long clips.
fn piecewise_expression(values: &[u32], fps: f64) -> String {
    let last = values[values.len() - 1].to_string();

    values[..values.len() - 1]
        .iter()
        .enumerate()
        .rfold(last, |rest, (i, value)| {
            let boundary = (i as f64 + 1.0) / fps;
            format!("if(lt(t,{:.3}),{},{})", boundary, value, rest)
        })
}

/// Whether a sequence of crop windows is close enough to motionless that a
/// static crop would look the same.
///
/// Movement under 5% of the crop width on both axes counts as static.
pub fn is_effectively_static(windows: &[CropWindow]) -> bool {
    if windows.len() <= 1 {
        return true;
    }

    let x_min = windows.iter().map(|w| w.x).min().unwrap_or(0);
    let x_max = windows.iter().map(|w| w.x).max().unwrap_or(0);
    let y_min = windows.iter().map(|w| w.y).min().unwrap_or(0);
    let y_max = windows.iter().map(|w| w.y).max().unwrap_or(0);

    let threshold = windows[0].width as f64 * 0.05;

    ((x_max - x_min) as f64) < threshold && ((y_max - y_min) as f64) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_1080P: FrameSize = FrameSize {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn test_static_crop_centers_on_mean() {
        let samples = vec![
            FaceSample::new(950.0, 530.0),
            FaceSample::new(960.0, 540.0),
            FaceSample::new(970.0, 550.0),
        ];

        let crop = static_crop(&samples, FRAME_1080P, &TrackerConfig::default()).unwrap();

        assert_eq!(crop.width, 606);
        assert_eq!(crop.height, 1080);
        assert!((crop.center_x() - 960.0).abs() < 5.0);
    }

    #[test]
    fn test_static_crop_order_irrelevant() {
        let forward = vec![
            FaceSample::new(100.0, 540.0),
            FaceSample::new(900.0, 540.0),
            FaceSample::new(1700.0, 540.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let config = TrackerConfig::default();
        assert_eq!(
            static_crop(&forward, FRAME_1080P, &config).unwrap(),
            static_crop(&reversed, FRAME_1080P, &config).unwrap()
        );
    }

    #[test]
    fn test_dynamic_crop_expression_shape() {
        let samples = vec![
            FaceSample::new(960.0, 540.0),
            FaceSample::new(965.0, 545.0),
            FaceSample::new(970.0, 540.0),
        ];

        let spec = dynamic_crop(&samples, FRAME_1080P, 30.0, &TrackerConfig::default()).unwrap();

        assert_eq!(spec.crop_width, 606);
        assert_eq!(spec.crop_height, 1080);

        // Two nested conditionals for three frames
        assert_eq!(spec.x_expression.matches("if(lt(t,").count(), 2);
        assert_eq!(spec.y_expression.matches("if(lt(t,").count(), 2);

        // Frame boundaries at 1/30 and 2/30, to 3 decimal places
        assert!(spec.x_expression.contains("lt(t,0.033)"));
        assert!(spec.x_expression.contains("lt(t,0.067)"));

        // Terminates in a bare value with balanced closing parens
        assert!(spec.x_expression.ends_with("))"));
        assert!(!spec.x_expression.ends_with(",))"));
    }

    #[test]
    fn test_dynamic_crop_values_follow_smoothing() {
        let samples = vec![
            FaceSample::new(960.0, 540.0),
            FaceSample::new(965.0, 545.0),
            FaceSample::new(970.0, 540.0),
        ];

        let spec = dynamic_crop(&samples, FRAME_1080P, 30.0, &TrackerConfig::default()).unwrap();

        // Smoothed x: 960, 961.5, 964.05 -> origins 657, 658, 661
        assert_eq!(
            spec.x_expression,
            "if(lt(t,0.033),657,if(lt(t,0.067),658,661))"
        );
    }

    #[test]
    fn test_dynamic_crop_single_sample_is_bare_value() {
        let samples = vec![FaceSample::new(960.0, 540.0)];

        let spec = dynamic_crop(&samples, FRAME_1080P, 30.0, &TrackerConfig::default()).unwrap();

        assert_eq!(spec.x_expression, "657");
        assert_eq!(spec.y_expression, "0");
    }

    #[test]
    fn test_empty_input_rejected() {
        let config = TrackerConfig::default();
        assert_eq!(
            static_crop(&[], FRAME_1080P, &config),
            Err(EngineError::EmptyInput)
        );
        assert_eq!(
            dynamic_crop(&[], FRAME_1080P, 30.0, &config),
            Err(EngineError::EmptyInput)
        );
    }

    #[test]
    fn test_long_sequence_nesting_depth() {
        let samples: Vec<FaceSample> = (0..240)
            .map(|i| FaceSample::new(800.0 + i as f64, 540.0))
            .collect();

        let spec = dynamic_crop(&samples, FRAME_1080P, 30.0, &TrackerConfig::default()).unwrap();

        assert_eq!(spec.x_expression.matches("if(lt(t,").count(), 239);
    }

    #[test]
    fn test_is_effectively_static() {
        let jitter: Vec<CropWindow> = [657u32, 659, 655, 658]
            .iter()
            .map(|&x| CropWindow::new(606, 1080, x, 0))
            .collect();
        assert!(is_effectively_static(&jitter));

        let pan: Vec<CropWindow> = [100u32, 400, 700]
            .iter()
            .map(|&x| CropWindow::new(606, 1080, x, 0))
            .collect();
        assert!(!is_effectively_static(&pan));

        assert!(is_effectively_static(&[]));
        assert!(is_effectively_static(&[CropWindow::new(606, 1080, 0, 0)]));
    }
}
