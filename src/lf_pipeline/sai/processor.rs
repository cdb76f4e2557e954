//! Center cropping of sub-aperture images and disparity maps.
//!
//! Every view is cropped to the same `crop_size` square before stacking so
//! the mosaic tiles line up. The window is centered: offsets are
//! `((w - size) / 2, (h - size) / 2)`.

use ndarray::s;

use crate::lf_pipeline::common::error::{Result, StackError};
use crate::lf_pipeline::sai::types::{DisparityMap, SaiImage};

fn crop_window(width: usize, height: usize, size: usize) -> Result<(usize, usize)> {
    if width < size || height < size {
        return Err(StackError::ImageTooSmall(width, height, size));
    }
    Ok(((width - size) / 2, (height - size) / 2))
}

/// Crops `sai` to a centered `crop_size` square.
///
/// Fails with [`StackError::ImageTooSmall`] when either source dimension is
/// below `crop_size`.
pub fn crop_sai(sai: &SaiImage, crop_size: usize) -> Result<SaiImage> {
    let (x0, y0) = crop_window(sai.width(), sai.height(), crop_size)?;
    let pixels = sai
        .pixels
        .slice(s![y0..y0 + crop_size, x0..x0 + crop_size, ..])
        .to_owned();
    Ok(SaiImage { pixels })
}

/// Crops a disparity map through the same centered window as [`crop_sai`].
pub fn crop_disparity(map: &DisparityMap, crop_size: usize) -> Result<DisparityMap> {
    let (x0, y0) = crop_window(map.width(), map.height(), crop_size)?;
    let values = map
        .values
        .slice(s![y0..y0 + crop_size, x0..x0 + crop_size])
        .to_owned();
    Ok(DisparityMap { values })
}
