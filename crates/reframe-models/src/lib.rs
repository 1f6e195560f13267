//! Shared data models for the AutoReframe engine.
//!
//! This crate provides Serde-serializable types for:
//! - Source frame geometry and target aspect ratios
//! - Per-frame face samples from an external detector
//! - Crop windows and time-parameterized crop filter specs

pub mod crop;
pub mod geometry;
pub mod sample;

// Re-export common types
pub use crop::{CropWindow, DynamicFilterSpec};
pub use geometry::{AspectRatio, AspectRatioParseError, FrameSize};
pub use sample::FaceSample;
