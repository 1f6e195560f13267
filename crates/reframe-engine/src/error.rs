//! Error types for reframing operations.

use thiserror::Error;

/// Result type for reframing operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while planning a crop.
///
/// Everything else in the engine is a total function: any face coordinate,
/// however far outside the frame, yields a boundary-clamped crop window
/// rather than an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no face samples supplied")]
    EmptyInput,

    #[error("invalid video dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl EngineError {
    /// Create an invalid dimensions error.
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidDimensions { width, height }
    }
}
