//! Pixel-distance comparison
//!
//! Acceptance tests compare resampled output against references with a
//! normalized euclidean distance rather than exact equality: different
//! correct implementations of the same filter disagree by a little
//! rounding. Pixels where either side is fully transparent are compared by
//! alpha alone, since their color channels carry no visible information.

use rowscale_core::RasterInfo;

/// Normalized pixel distance between two rasters of the same descriptor.
///
/// Returns the root of the summed squared per-channel differences, scaled
/// by `sqrt(w^2 + h^2)` so the threshold is independent of image size.
/// Identical rasters score 0.0.
///
/// # Panics
///
/// Panics if either sample vector does not match the descriptor.
pub fn normalized_distance(info: &RasterInfo, a: &[u8], b: &[u8]) -> f64 {
    let expected = info.row_bytes() * info.height() as usize;
    assert_eq!(a.len(), expected, "first raster does not match descriptor");
    assert_eq!(b.len(), expected, "second raster does not match descriptor");

    let channels = info.channels();
    let alpha_index = channels - 1;
    let mut sum = 0u64;
    for (pa, pb) in a.chunks_exact(channels).zip(b.chunks_exact(channels)) {
        let transparent =
            info.has_alpha() && (pa[alpha_index] == 0 || pb[alpha_index] == 0);
        if transparent {
            let diff = i64::from(pa[alpha_index]) - i64::from(pb[alpha_index]);
            sum += (diff * diff) as u64;
        } else {
            for c in 0..channels {
                let diff = i64::from(pa[c]) - i64::from(pb[c]);
                sum += (diff * diff) as u64;
            }
        }
    }

    let diagonal = f64::from(info.width()).hypot(f64::from(info.height()));
    (sum as f64).sqrt() / diagonal
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowscale_core::ColorMode;

    #[test]
    fn test_identical_rasters_score_zero() {
        let info = RasterInfo::new(3, 2, ColorMode::Rgb).unwrap();
        let samples = vec![7u8; 18];
        assert_eq!(normalized_distance(&info, &samples, &samples), 0.0);
    }

    #[test]
    fn test_single_channel_difference() {
        let info = RasterInfo::new(3, 4, ColorMode::Gray).unwrap();
        let a = vec![0u8; 12];
        let mut b = a.clone();
        b[5] = 10;
        // sqrt(100) / sqrt(9 + 16) = 10 / 5
        assert_eq!(normalized_distance(&info, &a, &b), 2.0);
    }

    #[test]
    fn test_transparent_pixels_compared_by_alpha_only() {
        let info = RasterInfo::new(1, 1, ColorMode::Rgba).unwrap();
        // Wildly different colors, both fully transparent: distance 0.
        let a = vec![255, 0, 0, 0];
        let b = vec![0, 255, 0, 0];
        assert_eq!(normalized_distance(&info, &a, &b), 0.0);
    }
}
