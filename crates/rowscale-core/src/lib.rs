//! Rowscale Core - Shared data model for streaming image resizing
//!
//! This crate provides the pieces shared by every rowscale crate:
//!
//! - [`RasterInfo`] / [`ColorMode`] - image descriptor and sample layout
//! - [`RowBuffer`] - owned single-scanline buffer with fallible allocation
//! - [`RowSource`] / [`RowSink`] - sequential scanline streams
//! - [`Error`] / [`Result`] - the error type spoken at the trait seam
//!
//! Everything operates on 8-bit samples; codecs normalize deeper or
//! palette-indexed images before exposing them as a [`RowSource`].

pub mod error;
pub mod raster;
pub mod row;

pub use error::{Error, Result};
pub use raster::{ColorMode, RasterInfo, RowBuffer};
pub use row::{RowSink, RowSource};
