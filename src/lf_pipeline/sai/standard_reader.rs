//! SAI reader implementation backed by the `image` and `ndarray-npy` crates.
//!
//! Sub-aperture images are decoded from any format the `image` crate
//! understands (the datasets ship PNG) and handed out as `(h, w, 3)` RGB
//! arrays. Disparity maps are read from `.npy` files as `(h, w)` f32 arrays.

use std::fs::File;
use std::path::Path;

use image::ImageReader;
use ndarray::{Array2, Array3};
use ndarray_npy::ReadNpyExt;
use tracing::debug;

use crate::lf_pipeline::common::error::{Result, StackError};
use crate::lf_pipeline::sai::reader::SaiReader;
use crate::lf_pipeline::sai::types::{DisparityMap, SaiImage};

pub struct StandardSaiReader;

impl SaiReader for StandardSaiReader {
    fn read_sai(&self, path: &Path) -> Result<SaiImage> {
        debug!("Decoding SAI {}", path.display());

        let reader = ImageReader::open(path).map_err(|e| {
            StackError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        let img = reader.decode().map_err(|e| {
            StackError::DecodeError(format!("{}: {}", path.display(), e))
        })?;

        // Normalize to 8-bit RGB regardless of the source color type.
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        let pixels =
            Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())
                .map_err(|e| {
                    StackError::ShapeMismatch(format!("{}: {}", path.display(), e))
                })?;

        Ok(SaiImage { pixels })
    }

    fn read_disparity(&self, path: &Path) -> Result<DisparityMap> {
        debug!("Reading disparity map {}", path.display());

        let file = File::open(path).map_err(|e| {
            StackError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        let values = Array2::<f32>::read_npy(file).map_err(|e| {
            StackError::DecodeError(format!("{}: {}", path.display(), e))
        })?;

        Ok(DisparityMap { values })
    }
}
