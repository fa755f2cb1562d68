//! Target dimension planning
//!
//! Turns the caller's intent (bounds to fit within, or explicit dimensions
//! with an optional derived axis) into a concrete target descriptor. The
//! two specification styles are deliberately separate modes with different
//! behavior: [`TargetSpec::BoundedFit`] never enlarges, while
//! [`TargetSpec::Exact`] resizes to whatever was asked for.

use crate::{ResampleError, ResampleResult, round_div};
use rowscale_core::RasterInfo;

/// How the caller describes the wanted output size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSpec {
    /// Largest size fitting within the given bounds at the source aspect
    /// ratio. `None` lifts the limit on that axis. Bounds larger than the
    /// source are clamped to it, so this mode never enlarges.
    BoundedFit {
        max_width: Option<u32>,
        max_height: Option<u32>,
    },
    /// Resize to the given dimensions. A `None` dimension is derived from
    /// the explicit one, preserving the source aspect ratio; giving both
    /// explicitly is a free-form resize. May enlarge.
    Exact {
        width: Option<u32>,
        height: Option<u32>,
    },
}

/// Compute the target descriptor for `source` under `spec`.
///
/// Derived dimensions use round-half-up on the integer ratio and are
/// floored to 1 so the result is always a valid raster.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidTarget`] if an explicit dimension is
/// zero, or if both dimensions of an [`TargetSpec::Exact`] are left to be
/// derived.
pub fn plan_dimensions(source: &RasterInfo, spec: TargetSpec) -> ResampleResult<RasterInfo> {
    let w = u64::from(source.width());
    let h = u64::from(source.height());

    let (target_w, target_h) = match spec {
        TargetSpec::BoundedFit {
            max_width,
            max_height,
        } => {
            let max_w = checked(max_width, "max width")?.map_or(w, |m| m.min(w));
            let max_h = checked(max_height, "max height")?.map_or(h, |m| m.min(h));
            let mut target_w = max_w;
            let mut target_h = round_div(target_w * h, w);
            if target_h > max_h {
                target_h = max_h;
                target_w = round_div(target_h * w, h);
            }
            (target_w, target_h)
        }
        TargetSpec::Exact { width, height } => {
            match (checked(width, "width")?, checked(height, "height")?) {
                (None, None) => {
                    return Err(ResampleError::InvalidTarget(
                        "at most one dimension may be derived".into(),
                    ));
                }
                (Some(target_w), Some(target_h)) => (target_w, target_h),
                (Some(target_w), None) => (target_w, round_div(target_w * h, w)),
                (None, Some(target_h)) => (round_div(target_h * w, h), target_h),
            }
        }
    };

    Ok(source.with_size(target_w.max(1) as u32, target_h.max(1) as u32)?)
}

fn checked(dim: Option<u32>, name: &str) -> ResampleResult<Option<u64>> {
    match dim {
        Some(0) => Err(ResampleError::InvalidTarget(format!(
            "{name} must be positive"
        ))),
        other => Ok(other.map(u64::from)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowscale_core::ColorMode;

    fn src(w: u32, h: u32) -> RasterInfo {
        RasterInfo::new(w, h, ColorMode::Rgb).unwrap()
    }

    fn dims(info: RasterInfo) -> (u32, u32) {
        (info.width(), info.height())
    }

    #[test]
    fn test_bounded_fit_width_limited() {
        let plan = plan_dimensions(
            &src(400, 300),
            TargetSpec::BoundedFit {
                max_width: Some(200),
                max_height: Some(200),
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (200, 150));
    }

    #[test]
    fn test_bounded_fit_height_limited() {
        let plan = plan_dimensions(
            &src(400, 300),
            TargetSpec::BoundedFit {
                max_width: Some(300),
                max_height: Some(150),
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (200, 150));
    }

    #[test]
    fn test_bounded_fit_never_enlarges() {
        let plan = plan_dimensions(
            &src(40, 30),
            TargetSpec::BoundedFit {
                max_width: Some(4000),
                max_height: Some(3000),
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (40, 30));
    }

    #[test]
    fn test_bounded_fit_open_axis() {
        let plan = plan_dimensions(
            &src(400, 300),
            TargetSpec::BoundedFit {
                max_width: Some(100),
                max_height: None,
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (100, 75));
    }

    #[test]
    fn test_bounded_fit_floors_to_one() {
        // A very wide strip squeezed to 5 wide would round its height to 0.
        let plan = plan_dimensions(
            &src(10000, 10),
            TargetSpec::BoundedFit {
                max_width: Some(5),
                max_height: None,
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (5, 1));
    }

    #[test]
    fn test_exact_verbatim() {
        let plan = plan_dimensions(
            &src(400, 300),
            TargetSpec::Exact {
                width: Some(111),
                height: Some(777),
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (111, 777));
    }

    #[test]
    fn test_exact_derive_height() {
        let plan = plan_dimensions(
            &src(400, 300),
            TargetSpec::Exact {
                width: Some(200),
                height: None,
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (200, 150));
    }

    #[test]
    fn test_exact_derive_width_rounds_half_up() {
        // 100 * 3 / 200 = 1.5, round half up -> 2
        let plan = plan_dimensions(
            &src(3, 200),
            TargetSpec::Exact {
                width: None,
                height: Some(100),
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (2, 100));
    }

    #[test]
    fn test_exact_both_derived_rejected() {
        let err = plan_dimensions(
            &src(4, 4),
            TargetSpec::Exact {
                width: None,
                height: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ResampleError::InvalidTarget(_)));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        for spec in [
            TargetSpec::Exact {
                width: Some(0),
                height: Some(10),
            },
            TargetSpec::BoundedFit {
                max_width: Some(0),
                max_height: None,
            },
        ] {
            assert!(matches!(
                plan_dimensions(&src(4, 4), spec),
                Err(ResampleError::InvalidTarget(_))
            ));
        }
    }

    #[test]
    fn test_exact_may_enlarge() {
        let plan = plan_dimensions(
            &src(40, 30),
            TargetSpec::Exact {
                width: Some(80),
                height: None,
            },
        )
        .unwrap();
        assert_eq!(dims(plan), (80, 60));
    }
}
