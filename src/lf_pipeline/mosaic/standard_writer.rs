use std::path::Path;

use image::RgbImage;
use ndarray::{Array3, Array4};
use ndarray_npy::write_npy;
use tracing::debug;

use crate::lf_pipeline::common::error::{Result, StackError};
use crate::lf_pipeline::mosaic::writer::MosaicWriter;
use crate::lf_pipeline::sai::types::DisparityMap;

/// Mosaic writer backed by the `image` crate for PNGs and `ndarray-npy` for
/// raw disparity arrays. The image format is picked from the output path's
/// extension.
pub struct StandardMosaicWriter;

impl MosaicWriter for StandardMosaicWriter {
    fn write_mosaic(&self, mosaic: &Array3<u8>, path: &Path) -> Result<()> {
        let (height, width, channels) = mosaic.dim();
        debug!("Encoding {}x{} mosaic to {}", width, height, path.display());

        if channels != 3 {
            return Err(StackError::ShapeMismatch(format!(
                "mosaic has {} channels, expected 3",
                channels
            )));
        }

        let data = mosaic
            .as_standard_layout()
            .into_owned()
            .into_raw_vec_and_offset()
            .0;
        let img = RgbImage::from_raw(width as u32, height as u32, data).ok_or_else(|| {
            StackError::ShapeMismatch(format!(
                "mosaic buffer does not fit {}x{}x3",
                width, height
            ))
        })?;

        img.save(path).map_err(|e| {
            StackError::OutputWriteError(format!("{}: {}", path.display(), e))
        })
    }

    fn write_disparity(&self, map: &DisparityMap, path: &Path) -> Result<()> {
        debug!("Writing disparity map to {}", path.display());
        write_npy(path, &map.values).map_err(|e| {
            StackError::OutputWriteError(format!("{}: {}", path.display(), e))
        })
    }

    fn write_disparity_stack(&self, stack: &Array4<f32>, path: &Path) -> Result<()> {
        debug!("Writing disparity stack to {}", path.display());
        write_npy(path, stack).map_err(|e| {
            StackError::OutputWriteError(format!("{}: {}", path.display(), e))
        })
    }
}
