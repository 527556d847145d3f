//! # graymill
//!
//! Convert images to grayscale by averaging each pixel's channels, splitting
//! the work across one worker per logical CPU.
//!
//! The input format is detected from file content. The output format is
//! picked from the output path's extension: PNG, JPEG (quality 100), BMP,
//! or TGA.
//!
//! ## Example
//!
//! ```no_run
//! use graymill::{Config, Pipeline};
//!
//! # fn main() -> graymill::Result<()> {
//! let pipeline = Pipeline::new(Config::default());
//!
//! pipeline.process("photo.jpg", "photo-gray.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{Config, Pipeline};
