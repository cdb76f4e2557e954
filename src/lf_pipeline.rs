//! Light-field flattening pipeline module
//!
//! This module provides a structured approach to stacking sub-aperture image
//! datasets into single flattened light-field images, with separate modules
//! for view handling, mosaic assembly, and the per-dataset drivers.

pub mod common;
pub mod flatten;
pub mod mosaic;
pub mod sai;

pub use common::{Result, StackError};

pub use sai::{
    crop_disparity, crop_sai, select_sai_range, DisparityMap, SaiImage, SaiRange, SaiReader,
    StandardSaiReader,
};

pub use mosaic::{DisparityBuffer, LfiBuffer, MosaicWriter, StandardMosaicWriter};

pub use flatten::{
    HciFlattener, StackConfig, StackConfigBuilder, VideoFlattener, VideoOutputs,
};
