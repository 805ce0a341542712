//! Bilevel error diffusion.
//!
//! Reduces a grayscale buffer to one bit per pixel while preserving
//! perceived local brightness: each pixel is thresholded at the 8-bit
//! midpoint and the rounding error is pushed onto not-yet-visited
//! neighbors per the diffusion kernel.

mod kernel;

pub use kernel::{Kernel, FLOYD_STEINBERG};

/// Quantize a luminance buffer to bits with Floyd-Steinberg dithering.
///
/// Scans pixels in row-major order (left to right, top to bottom). Each
/// pixel's error-adjusted luminance is compared against 128: below maps
/// to bit 0 (dark), at-or-above to bit 1 (light). The residual error
/// `old - (0 or 255)` is diffused forward: 7/16 right, 3/16 below-left,
/// 5/16 below, 1/16 below-right. Targets outside the image are skipped;
/// their share of the error is dropped rather than redistributed, so
/// total error is lossy at the edges.
///
/// The working buffer is `f32` and accumulated error is not clamped
/// between pixels; transient values may leave `[0, 255]`. Only the
/// threshold comparison consumes the value.
///
/// The scan order is an invariant, not an option: every kernel target
/// lies strictly later in the row-major order, so a single pass decides
/// each pixel exactly once. The output is deterministic for a given
/// input.
///
/// # Arguments
/// * `luma` - Grayscale pixels (0-255), row-major, length `width * height`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// One byte per pixel, each 0 (dark) or 1 (light), row-major.
pub fn dither_bilevel(luma: &[u8], width: u32, height: u32) -> Vec<u8> {
    dither_with_kernel(luma, width, height, &FLOYD_STEINBERG, false)
}

/// Error diffusion loop parameterized by kernel and column order.
///
/// `reverse_columns` visits each row right-to-left without mirroring the
/// kernel; it exists only so tests can demonstrate that violating the
/// row-major scan invariant changes the output.
pub(crate) fn dither_with_kernel(
    luma: &[u8],
    width: u32,
    height: u32,
    kernel: &Kernel,
    reverse_columns: bool,
) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    debug_assert_eq!(luma.len(), w * h);

    // Transient error accumulator, owned by this pass alone
    let mut buffer: Vec<f32> = luma.iter().map(|&v| v as f32).collect();
    let mut bits = vec![0u8; w * h];
    let divisor = kernel.divisor as f32;

    for y in 0..h {
        let xs: Box<dyn Iterator<Item = usize>> = if reverse_columns {
            Box::new((0..w).rev())
        } else {
            Box::new(0..w)
        };

        for x in xs {
            let idx = y * w + x;
            let old = buffer[idx];

            // Quantization decision at the 8-bit midpoint
            let new = if old < 128.0 { 0.0 } else { 255.0 };
            bits[idx] = if new == 0.0 { 0 } else { 1 };

            let error = old - new;

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx >= 0 && (nx as usize) < w {
                    let ny = y + dy as usize;
                    if ny < h {
                        buffer[ny * w + nx as usize] += error * weight as f32 / divisor;
                    }
                }
            }
        }
    }

    bits
}
