//! Fixed-point fractional cursors for the box filter
//!
//! The downscaler walks the source grid one step at a time while tracking
//! where each step falls on the (coarser) target grid. Positions are kept
//! as integer remainders in units of `1/source`, so a full pass accumulates
//! no drift: every source step carries a total weight of exactly `target`,
//! split between the open target cell and its successor at cell boundaries.

/// How one source step distributes across the target grid.
///
/// `current + next == target` for every step; `next` is nonzero only when
/// the step closes the open target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Split {
    /// Weight assigned to the open target cell
    pub current: u64,
    /// Spillover into the following target cell
    pub next: u64,
    /// True when this step closes the open target cell
    pub boundary: bool,
}

/// Remainder-accumulating cursor mapping `source` steps onto `target` cells.
///
/// Requires `target <= source`; the upscaler uses floating point instead.
#[derive(Debug)]
pub(crate) struct FracCursor {
    source: u64,
    target: u64,
    rem: u64,
}

impl FracCursor {
    pub fn new(source: u32, target: u32) -> Self {
        debug_assert!(target <= source);
        Self {
            source: u64::from(source),
            target: u64::from(target),
            rem: 0,
        }
    }

    /// Advance by one source step.
    pub fn step(&mut self) -> Split {
        self.rem += self.target;
        if self.rem >= self.source {
            self.rem -= self.source;
            Split {
                current: self.target - self.rem,
                next: self.rem,
                boundary: true,
            }
        } else {
            Split {
                current: self.target,
                next: 0,
                boundary: false,
            }
        }
    }
}
