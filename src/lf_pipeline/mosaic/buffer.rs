//! Stacking buffers for light-field mosaics.
//!
//! Views are written cell by cell into a 5-dimensional buffer shaped
//! `(div, img_size, div, img_size, 3)` whose axes run
//! `(u, row, v, col, channel)`. In that axis order a plain row-major reshape
//! to `(div*img_size, div*img_size, 3)` lays the view at grid cell `(u, v)`
//! out as the `img_size` square pixel block starting at
//! `(u*img_size, v*img_size)`.

use ndarray::{s, Array3, Array4, Array5};

use crate::lf_pipeline::common::error::{Result, StackError};
use crate::lf_pipeline::sai::range::grid_side;
use crate::lf_pipeline::sai::types::{DisparityMap, SaiImage};

/// Accumulates cropped views into the tiled light-field image.
#[derive(Debug)]
pub struct LfiBuffer {
    div: usize,
    img_size: usize,
    cells: Array5<u8>,
    placed: Vec<bool>,
}

impl LfiBuffer {
    pub fn new(target_n_sai: usize, img_size: usize) -> Result<Self> {
        let div = grid_side(target_n_sai)?;
        Ok(Self {
            div,
            img_size,
            cells: Array5::zeros((div, img_size, div, img_size, 3)),
            placed: vec![false; target_n_sai],
        })
    }

    pub fn div(&self) -> usize {
        self.div
    }

    /// Writes one cropped view into grid cell `(offset / div, offset % div)`.
    pub fn place(&mut self, offset: usize, sai: &SaiImage) -> Result<()> {
        if offset >= self.placed.len() {
            return Err(StackError::InvalidRange(format!(
                "view offset {} outside {}-cell grid",
                offset,
                self.placed.len()
            )));
        }
        if sai.height() != self.img_size || sai.width() != self.img_size {
            return Err(StackError::ShapeMismatch(format!(
                "view is {}x{}, expected {}x{}",
                sai.width(),
                sai.height(),
                self.img_size,
                self.img_size
            )));
        }

        let (u, v) = (offset / self.div, offset % self.div);
        self.cells
            .slice_mut(s![u, .., v, .., ..])
            .assign(&sai.pixels);
        self.placed[offset] = true;
        Ok(())
    }

    /// Reshapes the buffer into the final `(div*img_size, div*img_size, 3)`
    /// mosaic.
    ///
    /// Every cell must have been placed; a partially filled buffer fails with
    /// [`StackError::ShapeMismatch`] rather than emitting black tiles.
    pub fn into_mosaic(self) -> Result<Array3<u8>> {
        self.check_complete()?;
        let side = self.div * self.img_size;
        self.cells
            .into_shape_with_order((side, side, 3))
            .map_err(|e| StackError::ShapeMismatch(e.to_string()))
    }

    fn check_complete(&self) -> Result<()> {
        let missing = self.placed.iter().filter(|&&p| !p).count();
        if missing > 0 {
            return Err(StackError::ShapeMismatch(format!(
                "mosaic incomplete: {} of {} cells never placed",
                missing,
                self.placed.len()
            )));
        }
        Ok(())
    }
}

/// Parallel buffer for disparity maps, stacked the same way as the images
/// but without a channel axis.
///
/// The stack is persisted unreshaped as a `(div, img_size, div, img_size)`
/// array.
#[derive(Debug)]
pub struct DisparityBuffer {
    div: usize,
    img_size: usize,
    cells: Array4<f32>,
    placed: Vec<bool>,
}

impl DisparityBuffer {
    pub fn new(target_n_sai: usize, img_size: usize) -> Result<Self> {
        let div = grid_side(target_n_sai)?;
        Ok(Self {
            div,
            img_size,
            cells: Array4::zeros((div, img_size, div, img_size)),
            placed: vec![false; target_n_sai],
        })
    }

    pub fn place(&mut self, offset: usize, map: &DisparityMap) -> Result<()> {
        if offset >= self.placed.len() {
            return Err(StackError::InvalidRange(format!(
                "view offset {} outside {}-cell grid",
                offset,
                self.placed.len()
            )));
        }
        if map.height() != self.img_size || map.width() != self.img_size {
            return Err(StackError::ShapeMismatch(format!(
                "disparity map is {}x{}, expected {}x{}",
                map.width(),
                map.height(),
                self.img_size,
                self.img_size
            )));
        }

        let (u, v) = (offset / self.div, offset % self.div);
        self.cells.slice_mut(s![u, .., v, ..]).assign(&map.values);
        self.placed[offset] = true;
        Ok(())
    }

    pub fn into_stack(self) -> Result<Array4<f32>> {
        let missing = self.placed.iter().filter(|&&p| !p).count();
        if missing > 0 {
            return Err(StackError::ShapeMismatch(format!(
                "disparity stack incomplete: {} of {} cells never placed",
                missing,
                self.placed.len()
            )));
        }
        Ok(self.cells)
    }
}
