//! Quantizer builder -- the primary entry point for the crate.

use crate::dither::dither_bilevel;
use crate::output::QuantizedImage;
use crate::palette::DuotonePalette;
use crate::preprocess::{fit_within, resize_bilinear};
use crate::raster::RasterImage;

/// Default maximum output dimension, matching the attachment size the
/// feed accepts.
pub const DEFAULT_MAX_DIMENSION: u32 = 800;

/// Two-color quantization pipeline with fluent configuration.
///
/// Runs fit-and-resize, grayscale reduction, and error diffusion as one
/// synchronous pass. The palette is a constructor argument, never
/// ambient state, so quantization is a pure function of
/// `(image, palette, configuration)`.
///
/// # Design
///
/// - Constructor requires a [`DuotonePalette`]
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one builder is
///   reusable across images; separate calls share no state and may run
///   on separate threads freely
///
/// # Example
///
/// ```
/// use duotone_dither::{DuotonePalette, Quantizer, RasterImage};
///
/// let quantizer = Quantizer::new(DuotonePalette::default())
///     .max_dimensions(800, 800);
///
/// let image = RasterImage::new(4, 4, vec![90; 4 * 4 * 3]).unwrap();
/// let result = quantizer.quantize(&image);
///
/// assert!(result.width() <= 800 && result.height() <= 800);
/// ```
pub struct Quantizer {
    palette: DuotonePalette,
    max_width: u32,
    max_height: u32,
    upscale: bool,
}

impl Quantizer {
    /// Create a quantizer for the given palette.
    ///
    /// Defaults: 800x800 maximum dimensions, upscaling enabled (images
    /// smaller than the bounds are grown to meet them).
    pub fn new(palette: DuotonePalette) -> Self {
        Self {
            palette,
            max_width: DEFAULT_MAX_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION,
            upscale: true,
        }
    }

    /// Set the maximum output dimensions.
    ///
    /// Output always fits within these bounds with aspect ratio
    /// preserved to within a pixel of rounding.
    #[inline]
    pub fn max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Set whether images smaller than the maximum dimensions are
    /// scaled up to meet them. When disabled, the scale factor is
    /// clamped to 1 and small images pass through at original size.
    #[inline]
    pub fn upscale(mut self, enabled: bool) -> Self {
        self.upscale = enabled;
        self
    }

    /// Quantize an image to the two-color palette.
    ///
    /// The input is never mutated; the pass works on derived buffers it
    /// owns exclusively. Output is deterministic for a given input and
    /// configuration.
    pub fn quantize(&self, image: &RasterImage) -> QuantizedImage {
        let (out_w, out_h) = fit_within(
            image.width(),
            image.height(),
            self.max_width,
            self.max_height,
            self.upscale,
        );

        let scaled = resize_bilinear(image.pixels(), image.width(), image.height(), out_w, out_h);
        let luma = crate::raster::luma_buffer(&scaled);
        let bits = dither_bilevel(&luma, out_w, out_h);

        QuantizedImage::new(bits, out_w, out_h, self.palette)
    }
}
