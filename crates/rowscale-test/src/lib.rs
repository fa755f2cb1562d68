//! rowscale-test - Test fixtures for the rowscale workspace
//!
//! Provides the pieces the crate test suites share:
//!
//! - [`MemorySource`] / [`MemorySink`] - strict in-memory row collaborators
//! - [`solid`] - flat sample-vector builder
//! - [`normalized_distance`] - the acceptance comparison metric

mod compare;
mod mem;

pub use compare::normalized_distance;
pub use mem::{MemorySink, MemorySource, solid};
