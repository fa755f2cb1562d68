//! rowscale - Streaming PNG resizing
//!
//! Resamples a raster to a new size while holding only a couple of rows in
//! memory, whatever the image dimensions. Downscaling uses an exact
//! area-weighted box filter; upscaling uses bilinear interpolation.
//!
//! The workspace splits into:
//!
//! - [`rowscale_core`] - descriptors, row buffers, the row-stream traits
//! - [`rowscale_resample`] - planning and the two resampling filters
//! - [`rowscale_io`] - the streaming PNG source and sink
//!
//! This crate re-exports the public API and adds the file-to-file
//! pipeline used by the `rowscale` binary.

pub use rowscale_core::{ColorMode, Error, RasterInfo, Result, RowBuffer, RowSink, RowSource};
pub use rowscale_io::{PngRowSink, PngRowSource};
pub use rowscale_resample::{
    ResampleError, ResampleResult, TargetSpec, downscale, plan_dimensions, resize, upscale,
};

use std::path::Path;

/// Resize the PNG at `input` into a new PNG at `output`.
///
/// Opens the source, plans the target dimensions from `spec`, streams the
/// resample, and finalizes both files. Returns the target descriptor.
///
/// A failed run removes whatever was written to `output`: a partial PNG
/// must never be left looking like a valid result.
///
/// # Errors
///
/// Propagates planner, codec, and resampler errors; see
/// [`ResampleError`] and the core [`Error`] variants.
pub fn resize_file<P, Q>(input: P, output: Q, spec: TargetSpec) -> ResampleResult<RasterInfo>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let result = run_pipeline(input.as_ref(), output.as_ref(), spec);
    if result.is_err() {
        let _ = std::fs::remove_file(output.as_ref());
    }
    result
}

fn run_pipeline(input: &Path, output: &Path, spec: TargetSpec) -> ResampleResult<RasterInfo> {
    let mut source = PngRowSource::open(input)?;
    let src = source.info();
    let target = plan_dimensions(&src, spec)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        src_w = src.width(),
        src_h = src.height(),
        dst_w = target.width(),
        dst_h = target.height(),
        "resizing"
    );
    let mut sink = PngRowSink::create(output, target)?;
    resize(&mut source, &mut sink)?;
    Ok(target)
}
