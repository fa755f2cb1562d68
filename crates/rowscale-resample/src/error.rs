//! Error types for rowscale-resample

use rowscale_core::ColorMode;
use thiserror::Error;

/// Errors that can occur while planning or running a resample
#[derive(Debug, Error)]
pub enum ResampleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rowscale_core::Error),

    /// Invalid target specification
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// Source and sink sample layouts disagree
    #[error("color mode mismatch: source {src:?}, target {target:?}")]
    ModeMismatch { src: ColorMode, target: ColorMode },

    /// Upscaling a single-row source has no vertical gradient to interpolate
    #[error("cannot upscale a {width}x1 source: no second row to interpolate from")]
    UnsupportedUpscale { width: u32 },
}

/// Result type for resample operations
pub type ResampleResult<T> = Result<T, ResampleError>;
