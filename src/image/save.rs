//! Image saving utilities.

use std::path::Path;

use image::codecs::{bmp::BmpEncoder, jpeg::JpegEncoder, png::PngEncoder, tga::TgaEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageResult};

use crate::error::{Error, Result};

use super::FormatTag;

/// JPEG quality used for every JPEG output (the encoder's maximum).
pub const JPEG_QUALITY: u8 = 100;

/// Serializes a single-channel image into `out`.
type WriteFn = fn(out: &mut Vec<u8>, pixels: &[u8], width: u32, height: u32) -> ImageResult<()>;

/// Writer for each output format.
fn writer_for(tag: FormatTag) -> WriteFn {
    match tag {
        FormatTag::Png => write_png,
        FormatTag::Jpeg => write_jpeg,
        FormatTag::Bmp => write_bmp,
        FormatTag::Tga => write_tga,
    }
}

fn write_png(out: &mut Vec<u8>, pixels: &[u8], width: u32, height: u32) -> ImageResult<()> {
    PngEncoder::new(out).write_image(pixels, width, height, ExtendedColorType::L8)
}

fn write_jpeg(out: &mut Vec<u8>, pixels: &[u8], width: u32, height: u32) -> ImageResult<()> {
    JpegEncoder::new_with_quality(out, JPEG_QUALITY).write_image(
        pixels,
        width,
        height,
        ExtendedColorType::L8,
    )
}

fn write_bmp(out: &mut Vec<u8>, pixels: &[u8], width: u32, height: u32) -> ImageResult<()> {
    BmpEncoder::new(out).write_image(pixels, width, height, ExtendedColorType::L8)
}

fn write_tga(out: &mut Vec<u8>, pixels: &[u8], width: u32, height: u32) -> ImageResult<()> {
    TgaEncoder::new(out)
        .disable_rle()
        .write_image(pixels, width, height, ExtendedColorType::L8)
}

/// Encode a single-channel buffer into the bytes of the given format.
///
/// # Errors
///
/// Returns the codec's error if the buffer cannot be encoded.
pub fn encode_gray(pixels: &[u8], width: u32, height: u32, tag: FormatTag) -> ImageResult<Vec<u8>> {
    let mut out = Vec::new();
    writer_for(tag)(&mut out, pixels, width, height)?;
    Ok(out)
}

/// Save a single-channel buffer to `path` in the given format.
///
/// The file is encoded in memory first and written in one call, so a codec
/// failure never touches the destination. An existing file is overwritten.
///
/// # Errors
///
/// Returns [`Error::Encode`] if encoding or writing the file fails.
pub fn save_image<P: AsRef<Path>>(
    path: P,
    pixels: &[u8],
    width: u32,
    height: u32,
    tag: FormatTag,
) -> Result<()> {
    let path = path.as_ref();

    encode_gray(pixels, width, height, tag)
        .and_then(|bytes| std::fs::write(path, &bytes).map_err(ImageError::IoError))
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {tag} to {}", path.display());

    Ok(())
}
