//! Bilinear resampling of interleaved RGB buffers.

/// Map a destination index to a source coordinate using pixel-center
/// alignment, clamped to the valid source range.
#[inline]
fn src_coord(dst_i: usize, scale: f32, src_len: u32) -> f32 {
    let max = (src_len - 1) as f32;
    ((dst_i as f32 + 0.5) * scale - 0.5).clamp(0.0, max)
}

/// Resample an interleaved RGB buffer to new dimensions with bilinear
/// interpolation.
///
/// Each destination pixel samples the four nearest source pixels and
/// blends them by fractional position, which is the smoothing quality
/// the pipeline requires (nearest-neighbor would alias badly under the
/// subsequent dither pass). Identity dimensions short-circuit to a copy.
///
/// The input buffer must hold `width * height * 3` bytes; the output
/// holds `new_width * new_height * 3`.
pub fn resize_bilinear(
    pixels: &[u8],
    width: u32,
    height: u32,
    new_width: u32,
    new_height: u32,
) -> Vec<u8> {
    debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);

    if width == new_width && height == new_height {
        return pixels.to_vec();
    }

    let src_w = width as usize;
    let scale_x = width as f32 / new_width as f32;
    let scale_y = height as f32 / new_height as f32;

    let mut dst = Vec::with_capacity(new_width as usize * new_height as usize * 3);

    for dst_y in 0..new_height as usize {
        let sy = src_coord(dst_y, scale_y, height);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(height as usize - 1);
        let fy = sy - y0 as f32;

        for dst_x in 0..new_width as usize {
            let sx = src_coord(dst_x, scale_x, width);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = sx - x0 as f32;

            let i00 = (y0 * src_w + x0) * 3;
            let i10 = (y0 * src_w + x1) * 3;
            let i01 = (y1 * src_w + x0) * 3;
            let i11 = (y1 * src_w + x1) * 3;

            for c in 0..3 {
                let p00 = pixels[i00 + c] as f32;
                let p10 = pixels[i10 + c] as f32;
                let p01 = pixels[i01 + c] as f32;
                let p11 = pixels[i11 + c] as f32;

                let top = p00 + (p10 - p00) * fx;
                let bottom = p01 + (p11 - p01) * fx;
                let value = top + (bottom - top) * fy;

                dst.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    dst
}
