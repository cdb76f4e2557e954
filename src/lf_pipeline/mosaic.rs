//! Mosaic assembly module
//!
//! This module provides the stacking buffers that tile cropped views into a
//! single flattened light-field image, and the writer seam that persists the
//! results.

mod buffer;
mod standard_writer;
mod writer;


pub use buffer::{DisparityBuffer, LfiBuffer};
pub use standard_writer::StandardMosaicWriter;
pub use writer::MosaicWriter;
