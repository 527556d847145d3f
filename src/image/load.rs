//! Image loading utilities.

use std::path::Path;

use image::DynamicImage;

use crate::error::{Error, Result};

use super::{ImageMetadata, PixelBuffer};

/// Load an image from disk into raw interleaved samples.
///
/// The format is detected from the file content, not its extension. The
/// native channel count is kept; sources wider than 8 bits per sample are
/// narrowed to 8 bits.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file is missing, unreadable, or not a
/// recognized image encoding.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<(PixelBuffer, ImageMetadata)> {
    let path = path.as_ref();

    let img = image::ImageReader::open(path)
        .and_then(image::ImageReader::with_guessed_format)
        .map_err(image::ImageError::IoError)
        .and_then(image::ImageReader::decode)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        "Decoded {} as {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(into_samples(img))
}

/// Flatten a decoded image into 8-bit samples with its native channel count.
fn into_samples(img: DynamicImage) -> (PixelBuffer, ImageMetadata) {
    let (width, height) = (img.width(), img.height());
    let channels = img.color().channel_count();

    let pixels = match channels {
        1 => img.into_luma8().into_raw(),
        2 => img.into_luma_alpha8().into_raw(),
        3 => img.into_rgb8().into_raw(),
        _ => img.into_rgba8().into_raw(),
    };

    let meta = ImageMetadata {
        width,
        height,
        channels: channels.min(4),
    };

    (pixels, meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{ImageBuffer, Luma, LumaA, Rgb, Rgba};

    #[test]
    fn test_rgb_keeps_three_channels() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(3, 2, Rgb([1, 2, 3])));
        let (pixels, meta) = into_samples(img);

        assert_eq!(meta.channels, 3);
        assert_eq!(pixels.len(), meta.sample_count());
        assert_eq!(&pixels[..3], &[1, 2, 3]);
    }

    #[test]
    fn test_native_channel_counts() {
        let cases = [
            (DynamicImage::ImageLuma8(ImageBuffer::from_pixel(2, 2, Luma([9]))), 1),
            (DynamicImage::ImageLumaA8(ImageBuffer::from_pixel(2, 2, LumaA([9, 9]))), 2),
            (DynamicImage::ImageRgba8(ImageBuffer::from_pixel(2, 2, Rgba([9, 9, 9, 9]))), 4),
        ];

        for (img, channels) in cases {
            let (pixels, meta) = into_samples(img);
            assert_eq!(meta.channels, channels);
            assert_eq!(pixels.len(), 4 * usize::from(channels));
        }
    }

    #[test]
    fn test_sixteen_bit_is_narrowed() {
        let img = DynamicImage::ImageRgb16(ImageBuffer::from_pixel(1, 1, Rgb([u16::MAX, 0, 0])));
        let (pixels, meta) = into_samples(img);

        assert_eq!(meta.channels, 3);
        assert_eq!(pixels, vec![255, 0, 0]);
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let result = load_image("definitely/not/here.png");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }
}
