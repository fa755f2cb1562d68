//! In-memory row collaborators
//!
//! [`MemorySource`] and [`MemorySink`] stand in for real codecs in tests.
//! Both enforce the row-stream contract strictly (row counts, row lengths,
//! finalization) so a resampler that mistreats its collaborators fails
//! loudly instead of producing plausible output.

use rowscale_core::{Error, RasterInfo, Result, RowBuffer, RowSink, RowSource};

/// Row source reading from a flat sample vector.
pub struct MemorySource {
    info: RasterInfo,
    samples: Vec<u8>,
    next_row: u32,
}

impl MemorySource {
    /// Wrap `samples`, which must hold exactly `height` rows.
    ///
    /// # Panics
    ///
    /// Panics if the sample length does not match the descriptor.
    pub fn new(info: RasterInfo, samples: Vec<u8>) -> Self {
        assert_eq!(
            samples.len(),
            info.row_bytes() * info.height() as usize,
            "sample vector does not match descriptor"
        );
        Self {
            info,
            samples,
            next_row: 0,
        }
    }
}

impl RowSource for MemorySource {
    fn info(&self) -> RasterInfo {
        self.info
    }

    fn read_row(&mut self, row: &mut RowBuffer) -> Result<()> {
        if self.next_row >= self.info.height() {
            return Err(Error::RowOverrun {
                height: self.info.height(),
            });
        }
        let len = self.info.row_bytes();
        if row.len() != len {
            return Err(Error::RowLengthMismatch {
                expected: len,
                actual: row.len(),
            });
        }
        let start = self.next_row as usize * len;
        row.as_mut_slice().copy_from_slice(&self.samples[start..start + len]);
        self.next_row += 1;
        Ok(())
    }
}

/// Row sink collecting into a flat sample vector.
pub struct MemorySink {
    info: RasterInfo,
    samples: Vec<u8>,
    rows_written: u32,
    finished: bool,
}

impl MemorySink {
    pub fn new(info: RasterInfo) -> Self {
        Self {
            info,
            samples: Vec::new(),
            rows_written: 0,
            finished: false,
        }
    }

    /// Rows accepted so far
    pub fn rows_written(&self) -> u32 {
        self.rows_written
    }

    /// Whether `finish` completed
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// The collected samples, top row first
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the sink, returning the collected samples
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}

impl RowSink for MemorySink {
    fn info(&self) -> RasterInfo {
        self.info
    }

    fn write_row(&mut self, row: &RowBuffer) -> Result<()> {
        if self.rows_written >= self.info.height() {
            return Err(Error::RowOverrun {
                height: self.info.height(),
            });
        }
        let len = self.info.row_bytes();
        if row.len() != len {
            return Err(Error::RowLengthMismatch {
                expected: len,
                actual: row.len(),
            });
        }
        self.samples.extend_from_slice(row.as_slice());
        self.rows_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.rows_written != self.info.height() {
            return Err(Error::Encode(format!(
                "finished after {} of {} rows",
                self.rows_written,
                self.info.height()
            )));
        }
        self.finished = true;
        Ok(())
    }
}

/// Build a flat sample vector with every pixel set to `pixel`.
///
/// # Panics
///
/// Panics if `pixel` does not match the descriptor's channel count.
pub fn solid(info: &RasterInfo, pixel: &[u8]) -> Vec<u8> {
    assert_eq!(pixel.len(), info.channels(), "pixel/channel count mismatch");
    let count = info.width() as usize * info.height() as usize;
    let mut samples = Vec::with_capacity(count * pixel.len());
    for _ in 0..count {
        samples.extend_from_slice(pixel);
    }
    samples
}
