//! Streaming area-weighted box filter
//!
//! Shrinks a raster by conceptually overlaying the target grid on the
//! source grid and averaging every source sample into the target cells it
//! overlaps, weighted by overlap area. The source is consumed one row at a
//! time; state is bounded by two accumulator banks of one target row each,
//! so memory use is independent of image height.
//!
//! Weights are exact integer fractions (see [`cursor`]): a sample's weight
//! is `frac_col * frac_row`, further scaled by `alpha / 255` for the color
//! channels of alpha-carrying images so that transparent source pixels do
//! not bias the visible color of the cells they fall into.
//!
//! [`cursor`]: crate::cursor

use crate::cursor::FracCursor;
use crate::resize::ensure_compatible;
use crate::{ResampleError, ResampleResult, round_div};
use rowscale_core::{Error as CoreError, RowBuffer, RowSink, RowSource};

const OPAQUE: u64 = 255;

/// One bank of accumulation state for a target row under construction.
///
/// Both arrays are laid out as `x * channels + c`. `coverage` holds the
/// weight mass backing each `weighted` sum, so a finished cell is
/// `weighted / coverage`.
struct AccumulatorBank {
    weighted: Vec<u64>,
    coverage: Vec<u64>,
}

impl AccumulatorBank {
    fn alloc(cells: usize) -> ResampleResult<Self> {
        Ok(Self {
            weighted: try_zeroed(cells)?,
            coverage: try_zeroed(cells)?,
        })
    }

    fn deposit(&mut self, index: usize, value: u64, weight: u64) {
        // Truncation order matters: weight already carries the alpha
        // factor, and both sums divide by 255 only after the full product.
        self.weighted[index] += value * weight / 255;
        self.coverage[index] += weight / 255;
    }

    fn clear(&mut self) {
        self.weighted.fill(0);
        self.coverage.fill(0);
    }
}

/// Two accumulator banks addressed through an index flag.
///
/// The open bank is the target row currently being closed; the other bank
/// collects vertical spillover for the row after it. Closing a row flushes
/// the open bank, zeroes it, and flips the flag.
struct AccumulatorRing {
    banks: [AccumulatorBank; 2],
    open: usize,
}

impl AccumulatorRing {
    fn alloc(cells: usize) -> ResampleResult<Self> {
        Ok(Self {
            banks: [AccumulatorBank::alloc(cells)?, AccumulatorBank::alloc(cells)?],
            open: 0,
        })
    }

    fn open_and_spill(&mut self) -> (&mut AccumulatorBank, &mut AccumulatorBank) {
        let [a, b] = &mut self.banks;
        if self.open == 0 { (a, b) } else { (b, a) }
    }

    fn rotate(&mut self) {
        self.banks[self.open].clear();
        self.open ^= 1;
    }
}

fn try_zeroed(len: usize) -> ResampleResult<Vec<u64>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| CoreError::AllocationFailed(len * size_of::<u64>()))?;
    v.resize(len, 0);
    Ok(v)
}

/// Shrink `source` into `sink` with the area-weighted box filter.
///
/// Both target dimensions must be at most the source dimensions; equal
/// dimensions degenerate to an exact copy. Reads exactly
/// `source.info().height()` rows and writes exactly
/// `sink.info().height()` rows, in order.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidTarget`] if a target dimension exceeds
/// the source, [`ResampleError::ModeMismatch`] if the descriptors disagree
/// on sample layout, and propagates any source or sink failure.
pub fn downscale<S: RowSource, K: RowSink>(source: &mut S, sink: &mut K) -> ResampleResult<()> {
    let src = source.info();
    let dst = sink.info();
    ensure_compatible(&src, &dst)?;
    if dst.width() > src.width() || dst.height() > src.height() {
        return Err(ResampleError::InvalidTarget(format!(
            "box filter cannot enlarge {}x{} to {}x{}",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        )));
    }
    tracing::debug!(
        src_w = src.width(),
        src_h = src.height(),
        dst_w = dst.width(),
        dst_h = dst.height(),
        "box filter downscale"
    );

    let channels = src.channels();
    let alpha_weighted = src.has_alpha();
    let alpha_index = channels - 1;
    let cells = dst.width() as usize * channels;

    let mut row = RowBuffer::for_info(&src)?;
    let mut out = RowBuffer::for_info(&dst)?;
    let mut acc = AccumulatorRing::alloc(cells)?;

    let mut y_cursor = FracCursor::new(src.height(), dst.height());
    for _ in 0..src.height() {
        source.read_row(&mut row)?;
        let y_split = y_cursor.step();

        let (open, spill) = acc.open_and_spill();
        let mut x_cursor = FracCursor::new(src.width(), dst.width());
        let mut write_x = 0usize;
        for x in 0..src.width() as usize {
            let x_split = x_cursor.step();
            let sample = &row[x * channels..(x + 1) * channels];
            for (c, &byte) in sample.iter().enumerate() {
                let value = u64::from(byte);
                let alpha = if alpha_weighted && c != alpha_index {
                    u64::from(sample[alpha_index])
                } else {
                    OPAQUE
                };
                let index = write_x * channels + c;
                open.deposit(index, value, x_split.current * y_split.current * alpha);
                if x_split.next > 0 {
                    open.deposit(index + channels, value, x_split.next * y_split.current * alpha);
                }
                if y_split.next > 0 {
                    spill.deposit(index, value, x_split.current * y_split.next * alpha);
                    if x_split.next > 0 {
                        spill.deposit(index + channels, value, x_split.next * y_split.next * alpha);
                    }
                }
            }
            if x_split.boundary {
                write_x += 1;
                debug_assert!(
                    write_x < dst.width() as usize || x as u32 == src.width() - 1,
                    "column cursor overran the target row"
                );
            }
        }

        if y_split.boundary {
            flush_row(open, &mut out);
            sink.write_row(&out)?;
            acc.rotate();
        }
    }

    Ok(())
}

/// Finalize one target row: round each weighted sum by its coverage.
///
/// Cells with zero coverage (only fully transparent samples fell into
/// them) emit 0; their value is irrelevant and must not divide by zero.
fn flush_row(bank: &AccumulatorBank, out: &mut RowBuffer) {
    for (i, sample) in out.iter_mut().enumerate() {
        *sample = if bank.coverage[i] == 0 {
            0
        } else {
            round_div(bank.weighted[i], bank.coverage[i]).min(255) as u8
        };
    }
}
