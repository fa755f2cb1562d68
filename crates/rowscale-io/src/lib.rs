//! rowscale-io - Streaming PNG collaborators
//!
//! Implements the core row traits over the `png` codec:
//!
//! - [`PngRowSource`] - decodes one scanline per read, normalizing
//!   palette, tRNS, sub-byte grayscale, and 16-bit input to 8-bit samples
//! - [`PngRowSink`] - encodes one scanline per write, flushing trailing
//!   metadata on finish
//!
//! Failures map into the core [`Error`] variants so the resampler sees a
//! single error type regardless of collaborator.
//!
//! [`Error`]: rowscale_core::Error

pub mod png;

pub use crate::png::{PngRowSink, PngRowSource};
