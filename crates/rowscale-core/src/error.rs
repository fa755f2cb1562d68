//! Error types for rowscale-core
//!
//! Provides the unified error type spoken at the row-source/row-sink seam.
//! Collaborator implementations (codecs, in-memory fixtures) map their
//! underlying failures into these variants so the resampling crates only
//! ever handle one error type.

use std::path::PathBuf;
use thiserror::Error;

/// Rowscale core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Unsupported sample bit depth
    #[error("unsupported bit depth: {0} bits per sample")]
    UnsupportedDepth(u8),

    /// Row length does not match the raster descriptor
    #[error("row length mismatch: expected {expected} bytes, got {actual}")]
    RowLengthMismatch { expected: usize, actual: usize },

    /// More rows moved than the raster holds
    #[error("row overrun: raster has only {height} rows")]
    RowOverrun { height: u32 },

    /// Memory allocation failed
    #[error("memory allocation failed for {0} bytes")]
    AllocationFailed(usize),

    /// Failed to open a file
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode error
    #[error("decode error: {0}")]
    Decode(String),

    /// Image encode error
    #[error("encode error: {0}")]
    Encode(String),

    /// Unsupported image format
    #[error("unsupported format: {0}")]
    Unsupported(String),
}

/// Result type alias for rowscale operations
pub type Result<T> = std::result::Result<T, Error>;
