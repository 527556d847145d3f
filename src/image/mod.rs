//! Image loading, format resolution, and saving utilities.

mod format;
mod load;
mod save;

pub use format::{resolve_format, FormatTag};
pub use load::load_image;
pub use save::{encode_gray, save_image};

/// Owned 8-bit samples in row-major, channel-interleaved order.
///
/// Length is always `width * height * channels` for the metadata it travels with.
pub type PixelBuffer = Vec<u8>;

/// Shape of a decoded image. Fixed once decoding succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel, 1-4.
    pub channels: u8,
}

impl ImageMetadata {
    /// Number of pixels in the image.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of samples a buffer of this shape holds.
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.pixel_count() * self.channels as usize
    }
}
