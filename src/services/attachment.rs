//! Image attachment pipeline: decode, quantize, encode.
//!
//! One call runs decode -> quantize -> encode for one image, all or
//! nothing. Failures stay local to the attachment; the caller can still
//! submit the post's text content. The quantization core lives in the
//! `duotone-dither` crate; this module supplies the codec side it
//! deliberately leaves to the host: decoding arbitrary raster bytes and
//! serializing the result to the transport encoding.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use duotone_dither::{DuotonePalette, Quantizer, QuantizedImage, RasterImage};
use image::ImageEncoder;

use crate::error::AttachmentError;

/// JPEG quality for the encoded attachment payload.
pub const JPEG_QUALITY: u8 = 85;

/// Process raw image bytes into a `data:image/jpeg;base64,...` URI,
/// quantized to the given palette.
///
/// Synchronous and CPU-bound; async callers should go through
/// [`process`] instead so the dither pass does not stall the runtime.
pub fn process_bytes(bytes: &[u8], palette: DuotonePalette) -> Result<String, AttachmentError> {
    let raster = decode(bytes)?;
    let quantized = Quantizer::new(palette).quantize(&raster);
    let jpeg = encode_jpeg(&quantized)?;
    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)))
}

/// Async wrapper around [`process_bytes`].
///
/// Runs the pipeline on the blocking thread pool. Dithering an
/// 800x800 image is tens of milliseconds of synchronous work; keeping
/// it off the async runtime keeps the interface responsive. Each call
/// owns its buffers, so concurrent attachments run independently. A
/// caller that no longer wants the result (the user picked a different
/// file) simply drops it; there is no cancellation hook and the pass
/// runs to completion.
pub async fn process(
    bytes: Vec<u8>,
    palette: DuotonePalette,
) -> Result<String, AttachmentError> {
    tokio::task::spawn_blocking(move || process_bytes(&bytes, palette))
        .await
        .map_err(|e| AttachmentError::Encoding(format!("attachment task failed: {e}")))?
}

/// Decode raster bytes (JPEG/PNG/WebP/...) into a validated RGB image.
///
/// Alpha is discarded: the image is flattened to opaque RGB before
/// quantization. Corrupt or zero-area input fails fast; there is no
/// partial processing.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, AttachmentError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| AttachmentError::InvalidImage(e.to_string()))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    RasterImage::new(width, height, rgb.into_raw())
        .map_err(|e| AttachmentError::InvalidImage(e.to_string()))
}

/// Serialize a quantized image to JPEG at the transport quality.
pub fn encode_jpeg(quantized: &QuantizedImage) -> Result<Vec<u8>, AttachmentError> {
    let rgb = quantized.to_rgb();
    let mut out = Vec::new();

    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut out), JPEG_QUALITY);
    encoder
        .write_image(
            &rgb,
            quantized.width(),
            quantized.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| AttachmentError::Encoding(e.to_string()))?;

    Ok(out)
}
