use std::path::Path;

use ndarray::{Array3, Array4};

use crate::lf_pipeline::common::error::Result;
use crate::lf_pipeline::sai::types::DisparityMap;

pub trait MosaicWriter {
    fn write_mosaic(&self, mosaic: &Array3<u8>, path: &Path) -> Result<()>;
    fn write_disparity(&self, map: &DisparityMap, path: &Path) -> Result<()>;
    fn write_disparity_stack(&self, stack: &Array4<f32>, path: &Path) -> Result<()>;
}
