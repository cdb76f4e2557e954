use std::path::Path;

use crate::lf_pipeline::common::error::Result;
use crate::lf_pipeline::sai::types::{DisparityMap, SaiImage};

pub trait SaiReader {
    fn read_sai(&self, path: &Path) -> Result<SaiImage>;
    fn read_disparity(&self, path: &Path) -> Result<DisparityMap>;
}
