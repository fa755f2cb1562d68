//! Raster descriptors and scanline buffers
//!
//! A [`RasterInfo`] describes one decoded image: dimensions, sample layout
//! and bit depth. Codecs normalize everything they decode to 8 bits per
//! sample before handing rows to the resampler, so `bit_depth` is 8 for
//! every descriptor produced by this workspace; the field exists so the
//! resampler can reject anything else instead of misreading samples.

use crate::{Error, Result};

/// Sample layout of a decoded scanline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// One gray sample per pixel
    Gray,
    /// Gray plus alpha
    GrayAlpha,
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl ColorMode {
    /// Number of byte samples per pixel
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Gray => 1,
            ColorMode::GrayAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    /// Whether the last channel is an alpha channel
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::GrayAlpha | ColorMode::Rgba)
    }
}

/// Descriptor for one raster image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterInfo {
    width: u32,
    height: u32,
    mode: ColorMode,
    bit_depth: u8,
}

impl RasterInfo {
    /// Create a descriptor for an 8-bit raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32, mode: ColorMode) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            mode,
            bit_depth: 8,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample layout
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Bits per sample (always 8 for descriptors built by this workspace)
    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    /// Byte samples per pixel
    pub fn channels(&self) -> usize {
        self.mode.channels()
    }

    /// Whether the last channel is an alpha channel
    pub fn has_alpha(&self) -> bool {
        self.mode.has_alpha()
    }

    /// Length in bytes of one scanline
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.mode.channels()
    }

    /// A descriptor with the same sample layout but different dimensions
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn with_size(&self, width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, self.mode)
    }
}

/// Owned buffer holding exactly one scanline of byte samples.
///
/// The resampler owns its row buffers for the whole operation and reuses
/// them between reads; sinks receive rows by reference and must copy what
/// they keep.
#[derive(Debug, Clone)]
pub struct RowBuffer {
    data: Vec<u8>,
}

impl RowBuffer {
    /// Allocate a zeroed buffer for one row of `info`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the allocation is refused.
    pub fn for_info(info: &RasterInfo) -> Result<Self> {
        Self::with_len(info.row_bytes())
    }

    /// Allocate a zeroed buffer of `len` bytes.
    pub fn with_len(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed(len))?;
        data.resize(len, 0);
        Ok(Self { data })
    }

    /// Buffer length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty (zero-length row)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The samples as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The samples as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl std::ops::Deref for RowBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl std::ops::DerefMut for RowBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
