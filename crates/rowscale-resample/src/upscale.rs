//! Streaming bilinear upscaler
//!
//! Enlarges a raster by bilinear interpolation over a two-row sliding
//! window. Samples sit at the upper-left corner of their pixel, so the
//! scale factors are `target / (source - 1)` and the last source
//! row/column is the final interpolation anchor. Arithmetic is floating
//! point: enlargement is rare and runs on small images, so exactness of
//! the fixed-point cursors is not needed here.

use crate::resize::ensure_compatible;
use crate::{ResampleError, ResampleResult};
use rowscale_core::{RowBuffer, RowSink, RowSource};

/// Enlarge `source` into `sink` with bilinear interpolation.
///
/// At least one target dimension must exceed its source dimension. Only
/// the source rows the window reaches are read; when the vertical scale
/// shrinks while the horizontal grows, trailing rows stay unread.
///
/// # Errors
///
/// Returns [`ResampleError::UnsupportedUpscale`] for a one-row-tall
/// source (there is no vertical gradient to interpolate),
/// [`ResampleError::InvalidTarget`] if neither dimension grows, and
/// propagates any source or sink failure.
pub fn upscale<S: RowSource, K: RowSink>(source: &mut S, sink: &mut K) -> ResampleResult<()> {
    let src = source.info();
    let dst = sink.info();
    ensure_compatible(&src, &dst)?;
    if dst.width() <= src.width() && dst.height() <= src.height() {
        return Err(ResampleError::InvalidTarget(format!(
            "bilinear upscale of {}x{} to {}x{} grows neither dimension",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        )));
    }
    if src.height() == 1 {
        return Err(ResampleError::UnsupportedUpscale { width: src.width() });
    }
    tracing::debug!(
        src_w = src.width(),
        src_h = src.height(),
        dst_w = dst.width(),
        dst_h = dst.height(),
        "bilinear upscale"
    );

    let channels = src.channels();
    let src_w = src.width();
    let src_h = src.height();

    // With a single source column the horizontal scale degenerates to
    // infinity and every output column anchors at column 0 with weight 1.
    let x_scale = f64::from(dst.width()) / f64::from(src_w - 1);
    let y_scale = f64::from(dst.height()) / f64::from(src_h - 1);

    let mut above = RowBuffer::for_info(&src)?;
    let mut below = RowBuffer::for_info(&src)?;
    let mut out = RowBuffer::for_info(&dst)?;

    source.read_row(&mut above)?;
    source.read_row(&mut below)?;
    let mut top = 0u32; // source index of the row held in `above`

    for y in 0..dst.height() {
        let src_y = f64::from(y) / y_scale;
        let anchor = (src_y as u32).min(src_h - 2);
        while top < anchor {
            std::mem::swap(&mut above, &mut below);
            source.read_row(&mut below)?;
            top += 1;
        }
        let from_below = src_y - f64::from(top);
        let from_above = 1.0 - from_below;

        for x in 0..dst.width() as usize {
            let src_x = x as f64 / x_scale;
            let left = (src_x as usize).min(src_w.saturating_sub(2) as usize);
            let right = (left + 1).min(src_w as usize - 1);
            let from_right = src_x - left as f64;
            let from_left = 1.0 - from_right;

            for c in 0..channels {
                let tl = f64::from(above[left * channels + c]);
                let tr = f64::from(above[right * channels + c]);
                let bl = f64::from(below[left * channels + c]);
                let br = f64::from(below[right * channels + c]);
                let value = tl * from_left * from_above
                    + tr * from_right * from_above
                    + bl * from_left * from_below
                    + br * from_right * from_below;
                out[x * channels + c] = value.round() as u8;
            }
        }
        sink.write_row(&out)?;
    }

    Ok(())
}
