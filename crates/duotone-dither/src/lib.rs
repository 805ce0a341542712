//! duotone-dither: Two-color error diffusion dithering
//!
//! This library reduces an arbitrary-color raster image to a two-color
//! (dark/light) bitmap that preserves perceived local brightness, using
//! grayscale conversion followed by Floyd-Steinberg error diffusion.
//! It exists so that image attachments can be restyled to match a
//! two-tone visual theme before upload.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder is the primary entry point:
//!
//! ```
//! use duotone_dither::{DuotonePalette, Quantizer, RasterImage, Rgb};
//!
//! let palette = DuotonePalette::new(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
//! let quantizer = Quantizer::new(palette).upscale(false);
//!
//! let image = RasterImage::new(2, 2, vec![128; 2 * 2 * 3]).unwrap();
//! let result = quantizer.quantize(&image);
//!
//! assert_eq!(result.width(), 2);
//! assert_eq!(result.height(), 2);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RasterImage              (interleaved 8-bit RGB, alpha already flattened)
//!     |
//!     v
//! [Fit + resize]           (aspect-preserving bilinear resample to fit
//!     |                     the configured maximum dimensions)
//!     v
//! [Grayscale]              (ITU-R BT.601 luma: 0.299 R + 0.587 G + 0.114 B)
//!     |
//!     v
//! [Error diffusion]        (row-major Floyd-Steinberg scan against the
//!     |                     8-bit midpoint threshold)
//!     v
//! QuantizedImage           (one bit per pixel + the palette)
//! ```
//!
//! # Why the scan order matters
//!
//! Error diffusion pushes each pixel's quantization error onto neighbors
//! that have not been decided yet. With the Floyd-Steinberg kernel every
//! diffusion target lies strictly later in a row-major scan (right on the
//! same row, or anywhere on the next row), so a single pass suffices and
//! no pixel is revisited. Reordering the scan feeds error into already
//! decided pixels and silently degrades the result, which is why the scan
//! order is fixed rather than configurable.
//!
//! # Numeric model
//!
//! The working luminance buffer is `f32`. Accumulated error may push a
//! pixel's transient value outside `[0, 255]`; it is not clamped between
//! pixels. Only the final threshold decision consumes the value, and
//! output pixels are palette bytes, so no out-of-range value can reach
//! the output. Keeping the fractional kernel weights exact in `f32` also
//! keeps the pipeline deterministic and hand-traceable.
//!
//! # What this crate does not do
//!
//! Decoding and encoding image files is the host application's job. The
//! crate operates on validated in-memory pixel buffers only, so the
//! algorithm stays platform-agnostic and testable without a graphics
//! subsystem.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod raster;


pub use api::Quantizer;
pub use color::{ParseColorError, Rgb};
pub use dither::{dither_bilevel, Kernel, FLOYD_STEINBERG};
pub use output::QuantizedImage;
pub use palette::DuotonePalette;
pub use raster::{RasterError, RasterImage};
