//! Custom error types for graymill.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the graymill library.
///
/// Every variant is fatal for a conversion run; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file is missing, unreadable, or not a recognized image encoding.
    #[error("failed to decode image from {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output path does not name a format we can write.
    #[error("unsupported output format for {path}: {reason}")]
    UnsupportedFormat { path: PathBuf, reason: String },

    /// Encoding or writing the output file failed.
    #[error("failed to encode image to {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias for graymill operations.
pub type Result<T> = std::result::Result<T, Error>;
