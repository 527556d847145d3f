//! Decode, transform, and re-encode pipeline.

use std::num::NonZeroUsize;
use std::path::Path;

use crate::error::Result;
use crate::image::{self, ImageMetadata, PixelBuffer};

use super::grayscale::{to_grayscale, worker_count};

/// Transforms a pixel buffer of known shape into a single-channel buffer of
/// the same width and height, using the given number of workers.
pub type Processor = fn(PixelBuffer, ImageMetadata, NonZeroUsize) -> PixelBuffer;

/// Configuration for the conversion pipeline.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Number of transform workers. `None` uses one per logical CPU.
    pub workers: Option<NonZeroUsize>,
}

impl Config {
    /// Worker count after applying the default.
    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers.unwrap_or_else(worker_count)
    }
}

/// Converts one image per call: decode, transform, resolve format, encode.
pub struct Pipeline {
    config: Config,
    processor: Processor,
}

impl Pipeline {
    /// Create a new pipeline with the grayscale processor.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            processor: to_grayscale,
        }
    }

    /// Replace the processor applied between decode and encode.
    #[must_use]
    pub fn with_processor(mut self, processor: Processor) -> Self {
        self.processor = processor;
        self
    }

    /// Convert the image at `input_path` and write it to `output_path`.
    ///
    /// The output encoding is chosen by the extension of `output_path`. Any
    /// failure aborts the run; nothing is written unless every earlier stage
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) if the input cannot be
    /// read, [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat) if
    /// the output extension is not recognized, and
    /// [`Error::Encode`](crate::Error::Encode) if writing the output fails.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Processing image: {}", input_path.display());
        let (pixels, meta) = image::load_image(input_path)?;

        let workers = self.config.workers();
        tracing::info!(
            "Converting {}x{} image with {} channels on {workers} workers",
            meta.width,
            meta.height,
            meta.channels
        );
        let gray = (self.processor)(pixels, meta, workers);

        let tag = image::resolve_format(output_path)?;

        tracing::info!("Saving {tag} output to: {}", output_path.display());
        image::save_image(output_path, &gray, meta.width, meta.height, tag)?;

        tracing::info!("Processing complete");
        Ok(())
    }
}
