//! Quantization result.

use crate::palette::DuotonePalette;

/// The output of one quantization pass.
///
/// Stores one bit per pixel (0 = dark, 1 = light) in row-major order,
/// together with the dimensions and the palette the image was quantized
/// against. The bit buffer is canonical; [`to_rgb()`](Self::to_rgb)
/// expands it on demand, and every expanded pixel is exactly one of the
/// palette's two colors.
pub struct QuantizedImage {
    /// One byte per pixel, each 0 or 1, row-major.
    bits: Vec<u8>,
    width: u32,
    height: u32,
    palette: DuotonePalette,
}

impl QuantizedImage {
    /// Wrap a dither result.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `bits.len() == width * height`.
    pub fn new(bits: Vec<u8>, width: u32, height: u32, palette: DuotonePalette) -> Self {
        debug_assert_eq!(
            bits.len(),
            width as usize * height as usize,
            "bit buffer length must match {}x{}",
            width,
            height,
        );
        Self {
            bits,
            width,
            height,
            palette,
        }
    }

    /// The dither bits, one byte per pixel, row-major.
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Output width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The palette this image was quantized against.
    #[inline]
    pub fn palette(&self) -> &DuotonePalette {
        &self.palette
    }

    /// Expand to an interleaved RGB buffer of length `width * height * 3`.
    ///
    /// Each pixel is the palette's `dark` or `light` color, nothing else.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.bits.len() * 3);
        for &bit in &self.bits {
            let [r, g, b] = self.palette.color_for(bit).to_bytes();
            rgb.push(r);
            rgb.push(g);
            rgb.push(b);
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn lavender_palette() -> DuotonePalette {
        DuotonePalette::new(Rgb::new(0, 0, 0), Rgb::new(203, 166, 247))
    }

    #[test]
    fn test_accessors() {
        let image = QuantizedImage::new(vec![0, 1, 1, 0], 2, 2, lavender_palette());
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.bits(), &[0, 1, 1, 0]);
        assert_eq!(image.palette().light(), Rgb::new(203, 166, 247));
    }

    #[test]
    fn test_to_rgb_layout_and_substitution() {
        let image = QuantizedImage::new(vec![0, 1], 2, 1, lavender_palette());
        assert_eq!(image.to_rgb(), vec![0, 0, 0, 203, 166, 247]);
    }

    #[test]
    fn test_to_rgb_only_emits_palette_colors() {
        let palette = lavender_palette();
        let bits = vec![0, 1, 1, 0, 1, 0];
        let image = QuantizedImage::new(bits, 3, 2, palette);
        for px in image.to_rgb().chunks(3) {
            let color = Rgb::new(px[0], px[1], px[2]);
            assert!(color == palette.dark() || color == palette.light());
        }
    }
}
