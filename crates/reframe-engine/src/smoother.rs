//! Temporal smoothing of face coordinates.
//!
//! Exponential moving average over a 2D coordinate stream, used to suppress
//! detector jitter before the crop origin is computed.

use reframe_models::FaceSample;

/// EMA smoother for a single coordinate stream.
///
/// State is `None` until the first sample, so a legitimate (0, 0) sample is
/// never confused with "no state yet". Updates are order-dependent: one
/// smoother per session, samples submitted in temporal order.
#[derive(Debug, Clone, Default)]
pub struct EmaSmoother {
    state: Option<(f64, f64)>,
}

impl EmaSmoother {
    /// Create a smoother with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blend a new sample into the smoothed position and return it.
    ///
    /// The first sample after construction or reset is adopted verbatim,
    /// so tracking starts with zero lag. Subsequent samples follow
    /// `smoothed = alpha * sample + (1 - alpha) * smoothed_prev`.
    pub fn update(&mut self, sample: FaceSample, alpha: f64) -> (f64, f64) {
        let next = match self.state {
            None => (sample.x, sample.y),
            Some((px, py)) => (
                alpha * sample.x + (1.0 - alpha) * px,
                alpha * sample.y + (1.0 - alpha) * py,
            ),
        };
        self.state = Some(next);
        next
    }

    /// Discard history; the next sample is adopted verbatim.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Current smoothed position, if any sample has been seen.
    pub fn current(&self) -> Option<(f64, f64)> {
        self.state
    }
}
