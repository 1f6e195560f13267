#![deny(unreachable_patterns)]
//! Face-centered vertical reframing engine.
//!
//! Turns a stream of per-frame face coordinates (from an external detector)
//! into a crop description an external encoder can apply: either one static
//! rectangle or a pair of piecewise time expressions for a moving subject.
//!
//! # Architecture
//!
//! ```text
//! Face samples (external detector)
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ DetectionPolicy │ ← gate on video duration
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │   FaceTracker   │ ← geometry once, then EMA smoothing + clamping
//! └────────┬────────┘   per frame
//!          ▼
//! ┌─────────────────┐
//! │   Synthesizer   │ ← static rectangle or piecewise x(t)/y(t)
//! └────────┬────────┘
//!          ▼
//!   Crop filter (external encoder)
//! ```
//!
//! The whole crate is synchronous pure computation. A [`FaceTracker`] holds
//! order-dependent smoothing state and must be fed frames sequentially;
//! distinct sessions are independent and may run in parallel.

pub mod config;
pub mod error;
pub mod filters;
pub mod geometry;
pub mod policy;
pub mod smoother;
pub mod synthesizer;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::{EngineError, EngineResult};
pub use filters::{centered_crop_filter, dynamic_crop_filter, static_crop_filter};
pub use policy::should_track;
pub use smoother::EmaSmoother;
pub use synthesizer::{dynamic_crop, is_effectively_static, static_crop};
pub use tracker::FaceTracker;
