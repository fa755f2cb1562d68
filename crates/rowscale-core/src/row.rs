//! Streaming row traits
//!
//! The resampler never holds more than a couple of rows at a time, so its
//! collaborators are expressed as sequential scanline streams: a
//! [`RowSource`] yields decoded rows top to bottom, a [`RowSink`] accepts
//! encoded rows in the same order. Neither side supports seeking.

use crate::{RasterInfo, Result, RowBuffer};

/// Sequential provider of decoded scanlines, top to bottom.
pub trait RowSource {
    /// Descriptor for the raster this source yields.
    fn info(&self) -> RasterInfo;

    /// Fill `row` with the next scanline.
    ///
    /// Callable at most `info().height()` times; `row` must be sized to
    /// `info().row_bytes()`.
    fn read_row(&mut self, row: &mut RowBuffer) -> Result<()>;

    /// Release the underlying resources.
    ///
    /// Trailing rows that were never read are allowed; a consumer that
    /// shrinks the image vertically may stop early.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sequential consumer of encoded scanlines, top to bottom.
pub trait RowSink {
    /// Descriptor for the raster this sink expects.
    fn info(&self) -> RasterInfo;

    /// Accept the next scanline.
    ///
    /// Must be called exactly `info().height()` times before [`finish`].
    ///
    /// [`finish`]: RowSink::finish
    fn write_row(&mut self, row: &RowBuffer) -> Result<()>;

    /// Flush trailing metadata and release the underlying resources.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
