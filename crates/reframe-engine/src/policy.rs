//! Duration-based gate for whether tracking is worth attempting.

use tracing::debug;

/// Videos shorter than this are almost certainly single short clips.
pub const SHORT_CLIP_SECS: f64 = 60.0;

/// Upper bound for single-subject tracking. Longer videos tend to be
/// edited content with multiple shots, where one tracking session would
/// chase cuts instead of a subject.
pub const MAX_TRACKED_DURATION_SECS: f64 = 600.0;

/// Whether face tracking should be attempted for a video of this duration.
///
/// Pure and stateless; the caller decides what to do on `false` (typically
/// a centered fallback crop).
pub fn should_track(duration_seconds: f64) -> bool {
    if duration_seconds < SHORT_CLIP_SECS {
        debug!(duration_seconds, "short clip, tracking enabled");
        true
    } else if duration_seconds < MAX_TRACKED_DURATION_SECS {
        debug!(duration_seconds, "talking-head length, tracking enabled");
        true
    } else {
        debug!(duration_seconds, "long-form video, tracking disabled");
        false
    }
}
