//! Resize orchestration
//!
//! Routes a source/sink pair to the right resampler and drives the
//! operation to completion, including collaborator finalization.

use crate::{ResampleError, ResampleResult, downscale, upscale};
use rowscale_core::{Error as CoreError, RasterInfo, RowSink, RowSource};

/// Resample `source` into `sink`, choosing the filter from the dimensions.
///
/// Targets within the source on both axes go through the box filter; any
/// axis that grows selects bilinear interpolation. Equal dimensions on
/// both axes deliberately route to the box filter, which degenerates to an
/// exact copy — this must hold even for one-row-tall sources, which the
/// bilinear path would reject.
///
/// On success both collaborators have been finalized: the source's
/// resources are released and the sink has flushed its trailing metadata.
///
/// # Errors
///
/// Propagates planner, resampler, source, and sink errors; the operation
/// is fatal on the first failure and produces no usable output.
pub fn resize<S: RowSource, K: RowSink>(source: &mut S, sink: &mut K) -> ResampleResult<()> {
    let src = source.info();
    let dst = sink.info();
    if dst.width() <= src.width() && dst.height() <= src.height() {
        downscale(source, sink)?;
    } else {
        upscale(source, sink)?;
    }
    source.finish()?;
    sink.finish()?;
    Ok(())
}

/// Check that two descriptors can sit on opposite ends of a resample.
pub(crate) fn ensure_compatible(src: &RasterInfo, dst: &RasterInfo) -> ResampleResult<()> {
    if src.mode() != dst.mode() {
        return Err(ResampleError::ModeMismatch {
            src: src.mode(),
            target: dst.mode(),
        });
    }
    for info in [src, dst] {
        if info.bit_depth() != 8 {
            return Err(CoreError::UnsupportedDepth(info.bit_depth()).into());
        }
    }
    Ok(())
}
