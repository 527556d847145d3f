//! Parallel grayscale conversion by unweighted channel averaging.
//!
//! The sample range is cut into one contiguous, pixel-aligned chunk per
//! worker. Each worker reads only its input chunk and writes only the
//! matching output chunk, so the result is identical for any worker count.

use std::num::NonZeroUsize;
use std::ops::Range;

use crate::image::{ImageMetadata, PixelBuffer};

/// Number of workers to use by default: the hardware-visible logical CPUs.
#[must_use]
pub fn worker_count() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Split `pixel_count` pixels of `channels` samples each into `workers`
/// contiguous sample ranges.
///
/// Every range starts and ends on a pixel boundary. The last range absorbs
/// the remainder, so the ranges cover `0..pixel_count * channels` exactly
/// once. When there are more workers than pixels, the leading ranges are empty.
#[must_use]
pub fn partition(pixel_count: usize, channels: usize, workers: NonZeroUsize) -> Vec<Range<usize>> {
    let workers = workers.get();
    let chunk = pixel_count / workers * channels;
    let total = pixel_count * channels;

    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { total } else { start + chunk };
            start..end
        })
        .collect()
}

/// Average each pixel of `src` into one sample of `dst`.
///
/// `src` holds `dst.len()` whole pixels of `channels` samples each.
#[allow(clippy::cast_possible_truncation)]
pub fn average_channels(src: &[u8], dst: &mut [u8], channels: usize) {
    debug_assert_eq!(src.len(), dst.len() * channels);

    for (pixel, out) in src.chunks_exact(channels).zip(dst.iter_mut()) {
        let sum: usize = pixel.iter().map(|&s| usize::from(s)).sum();
        // Mean of u8 samples always fits in u8.
        *out = (sum / channels) as u8;
    }
}

/// Convert an interleaved buffer to single-channel grayscale.
///
/// Each output sample is the truncated integer mean of the pixel's channels.
/// The source buffer is consumed. Workers run on the rayon pool and are all
/// joined before this returns.
///
/// # Panics
///
/// Panics if `pixels.len()` does not match `meta`.
#[must_use]
pub fn to_grayscale(
    pixels: PixelBuffer,
    meta: ImageMetadata,
    workers: NonZeroUsize,
) -> PixelBuffer {
    assert_eq!(
        pixels.len(),
        meta.sample_count(),
        "pixel buffer does not match {}x{}x{}",
        meta.width,
        meta.height,
        meta.channels
    );

    let pixel_count = meta.pixel_count();
    if pixel_count == 0 {
        return PixelBuffer::new();
    }

    let channels = usize::from(meta.channels);
    let mut output = vec![0u8; pixel_count];
    let ranges = partition(pixel_count, channels, workers);

    tracing::debug!(
        "Averaging {pixel_count} pixels across {} workers",
        ranges.len()
    );

    rayon::scope(|scope| {
        let mut rest = output.as_mut_slice();
        for range in ranges {
            let (dst, tail) = std::mem::take(&mut rest).split_at_mut(range.len() / channels);
            rest = tail;

            if dst.is_empty() {
                continue;
            }

            let src = &pixels[range];
            scope.spawn(move |_| average_channels(src, dst, channels));
        }
    });

    output
}
