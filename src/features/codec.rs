//! Image decode and JPEG re-encode with an embedded EXIF segment.

use crate::features::error::CodecError;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};

pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Decodes any supported image format from memory.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, CodecError> {
    image::load_from_memory(bytes).map_err(CodecError::Decode)
}

/// Encodes an image as baseline JPEG. Alpha is dropped.
///
/// `exif_blob` is the TIFF structure without the `Exif\0\0` identifier; the
/// encoder wraps it in an APP1 segment.
pub fn encode_jpeg(
    image: &DynamicImage,
    quality: u8,
    exif_blob: Option<Vec<u8>>,
) -> Result<Vec<u8>, CodecError> {
    let rgb = image.to_rgb8();
    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    if let Some(blob) = exif_blob {
        encoder
            .set_exif_metadata(blob)
            .map_err(CodecError::ExifRejected)?;
    }
    encoder
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(CodecError::Encode)?;
    Ok(out)
}

/// Best-effort guess of the source format, for logging.
pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}
