//! Geometry fitting and resampling ahead of the dither pass.
//!
//! The fit computation and the resampler are separate so the fit
//! arithmetic (scale factor, rounding, the upscale decision) can be
//! tested without touching pixels.

mod resize;

pub use resize::resize_bilinear;

/// Compute output dimensions that fit within `max_width x max_height`
/// while preserving aspect ratio.
///
/// The scale factor is `min(max_width / width, max_height / height)`.
/// When `upscale` is true a factor above 1 is applied as-is, so images
/// smaller than the bounds grow to meet them; when false the factor is
/// clamped to 1 and small images keep their dimensions.
///
/// Each output dimension is `round(dim * factor)` clamped to at least 1,
/// so extreme aspect ratios cannot round a dimension down to zero.
///
/// # Example
///
/// ```
/// use duotone_dither::preprocess::fit_within;
///
/// assert_eq!(fit_within(1000, 500, 800, 800, true), (800, 400));
/// assert_eq!(fit_within(100, 50, 800, 800, true), (800, 400));
/// assert_eq!(fit_within(100, 50, 800, 800, false), (100, 50));
/// ```
pub fn fit_within(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
    upscale: bool,
) -> (u32, u32) {
    let factor = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let factor = if upscale { factor } else { factor.min(1.0) };

    let out_w = ((width as f64 * factor).round() as u32).max(1);
    let out_h = ((height as f64 * factor).round() as u32).max(1);
    (out_w, out_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_downscales_to_bounds() {
        assert_eq!(fit_within(1600, 1600, 800, 800, true), (800, 800));
        assert_eq!(fit_within(1000, 500, 800, 800, true), (800, 400));
        assert_eq!(fit_within(500, 1000, 800, 800, true), (400, 800));
    }

    #[test]
    fn test_fit_upscales_by_default_behavior() {
        assert_eq!(fit_within(400, 400, 800, 800, true), (800, 800));
        assert_eq!(fit_within(100, 50, 800, 800, true), (800, 400));
    }

    #[test]
    fn test_fit_upscale_disabled_clamps_factor() {
        assert_eq!(fit_within(400, 400, 800, 800, false), (400, 400));
        // Downscaling still applies
        assert_eq!(fit_within(1600, 800, 800, 800, false), (800, 400));
    }

    #[test]
    fn test_fit_exact_fit_is_identity() {
        assert_eq!(fit_within(800, 800, 800, 800, true), (800, 800));
        assert_eq!(fit_within(800, 400, 800, 800, false), (800, 400));
    }

    #[test]
    fn test_fit_never_rounds_to_zero() {
        // 1 x 10000 fit into 800 x 800: factor = 0.08, width rounds to 0
        // without the clamp
        let (w, h) = fit_within(1, 10_000, 800, 800, true);
        assert_eq!(w, 1);
        assert_eq!(h, 800);
    }

    #[test]
    fn test_fit_preserves_aspect_within_rounding() {
        let (w, h) = fit_within(1920, 1080, 800, 800, true);
        assert_eq!((w, h), (800, 450));
        let src_aspect = 1920.0 / 1080.0;
        let dst_aspect = w as f64 / h as f64;
        assert!((src_aspect - dst_aspect).abs() < 0.01);
    }
}
