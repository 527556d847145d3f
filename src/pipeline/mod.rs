//! Grayscale conversion pipeline.

mod converter;
mod grayscale;

pub use converter::{Config, Pipeline, Processor};
pub use grayscale::{average_channels, partition, to_grayscale, worker_count};
