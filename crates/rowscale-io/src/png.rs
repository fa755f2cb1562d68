//! Streaming PNG row source and sink
//!
//! Wraps the `png` crate behind the core row traits. Decoding applies the
//! same normalization the resampler's data model assumes: palette images
//! expand to direct color, tRNS chunks become alpha channels, sub-byte
//! grayscale widens to 8 bits, and 16-bit samples are stripped to 8. After
//! that every PNG presents as 1-4 byte samples per pixel.
//!
//! Interlaced (Adam7) files are rejected: their passes cannot be streamed
//! strictly top to bottom, and this crate never buffers a whole image.

use png::{BitDepth, ColorType, Decoder, Encoder, Reader, StreamWriter, Transformations};
use rowscale_core::{ColorMode, Error, RasterInfo, Result, RowBuffer, RowSink, RowSource};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Row source decoding a PNG stream one scanline at a time.
pub struct PngRowSource<R: BufRead> {
    reader: Reader<R>,
    info: RasterInfo,
}

impl PngRowSource<BufReader<File>> {
    /// Open a PNG file for streaming decode.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path).map_err(|source| Error::Open {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> PngRowSource<R> {
    /// Wrap a PNG byte stream.
    ///
    /// # Errors
    ///
    /// Fails on malformed headers, interlaced images, and color layouts
    /// that do not normalize to 8-bit samples.
    pub fn new(raw: R) -> Result<Self> {
        let mut decoder = Decoder::new(raw);
        decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
        let reader = decoder
            .read_info()
            .map_err(|e| Error::Decode(format!("PNG decode error: {}", e)))?;

        if reader.info().interlaced {
            return Err(Error::Unsupported(
                "interlaced PNG cannot be streamed row by row".into(),
            ));
        }

        let (color_type, bit_depth) = reader.output_color_type();
        if bit_depth != BitDepth::Eight {
            return Err(Error::UnsupportedDepth(bit_depth as u8));
        }
        let mode = match color_type {
            ColorType::Grayscale => ColorMode::Gray,
            ColorType::GrayscaleAlpha => ColorMode::GrayAlpha,
            ColorType::Rgb => ColorMode::Rgb,
            ColorType::Rgba => ColorMode::Rgba,
            ColorType::Indexed => {
                return Err(Error::Unsupported(
                    "paletted PNG was not expanded by the decoder".into(),
                ));
            }
        };

        let info = RasterInfo::new(reader.info().width, reader.info().height, mode)?;
        Ok(Self { reader, info })
    }
}

impl<R: BufRead> RowSource for PngRowSource<R> {
    fn info(&self) -> RasterInfo {
        self.info
    }

    fn read_row(&mut self, row: &mut RowBuffer) -> Result<()> {
        let next = self
            .reader
            .next_row()
            .map_err(|e| Error::Decode(format!("PNG row error: {}", e)))?
            .ok_or(Error::RowOverrun {
                height: self.info.height(),
            })?;
        let data = next.data();
        if data.len() != row.len() {
            return Err(Error::RowLengthMismatch {
                expected: row.len(),
                actual: data.len(),
            });
        }
        row.as_mut_slice().copy_from_slice(data);
        Ok(())
    }
}

/// Row sink encoding a PNG stream one scanline at a time.
///
/// The writer is surrendered on [`finish`], which writes the trailing
/// IEND chunk; finishing before all rows were written is an error and the
/// output must be considered unusable.
///
/// [`finish`]: RowSink::finish
pub struct PngRowSink<W: Write + 'static> {
    writer: Option<StreamWriter<'static, W>>,
    info: RasterInfo,
    rows_written: u32,
}

impl PngRowSink<BufWriter<File>> {
    /// Create a PNG file for streaming encode.
    pub fn create<P: AsRef<Path>>(path: P, info: RasterInfo) -> Result<Self> {
        let file = File::create(&path).map_err(|source| Error::Open {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::new(BufWriter::new(file), info)
    }
}

impl<W: Write + 'static> PngRowSink<W> {
    /// Wrap a byte sink, writing the PNG header immediately.
    pub fn new(raw: W, info: RasterInfo) -> Result<Self> {
        let mut encoder = Encoder::new(raw, info.width(), info.height());
        encoder.set_color(match info.mode() {
            ColorMode::Gray => ColorType::Grayscale,
            ColorMode::GrayAlpha => ColorType::GrayscaleAlpha,
            ColorMode::Rgb => ColorType::Rgb,
            ColorMode::Rgba => ColorType::Rgba,
        });
        encoder.set_depth(BitDepth::Eight);
        let writer = encoder
            .write_header()
            .map_err(|e| Error::Encode(format!("PNG header error: {}", e)))?
            .into_stream_writer()
            .map_err(|e| Error::Encode(format!("PNG stream error: {}", e)))?;
        Ok(Self {
            writer: Some(writer),
            info,
            rows_written: 0,
        })
    }
}

impl<W: Write + 'static> RowSink for PngRowSink<W> {
    fn info(&self) -> RasterInfo {
        self.info
    }

    fn write_row(&mut self, row: &RowBuffer) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| Error::Encode("write after finish".into()))?;
        if self.rows_written >= self.info.height() {
            return Err(Error::RowOverrun {
                height: self.info.height(),
            });
        }
        if row.len() != self.info.row_bytes() {
            return Err(Error::RowLengthMismatch {
                expected: self.info.row_bytes(),
                actual: row.len(),
            });
        }
        writer
            .write_all(row.as_slice())
            .map_err(|e| Error::Encode(format!("PNG write error: {}", e)))?;
        self.rows_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| Error::Encode("finish called twice".into()))?;
        if self.rows_written != self.info.height() {
            return Err(Error::Encode(format!(
                "finished after {} of {} rows",
                self.rows_written,
                self.info.height()
            )));
        }
        writer
            .finish()
            .map_err(|e| Error::Encode(format!("PNG finish error: {}", e)))?;
        Ok(())
    }
}
