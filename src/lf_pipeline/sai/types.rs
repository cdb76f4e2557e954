//! Sub-aperture image data types

use ndarray::{Array2, Array3};

/// One decoded sub-aperture image (SAI).
#[derive(Debug, Clone)]
pub struct SaiImage {
    /// Interleaved RGB samples shaped `(height, width, 3)`
    pub pixels: Array3<u8>,
}

impl SaiImage {
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }
}

/// Per-pixel disparity values for one view.
#[derive(Debug, Clone)]
pub struct DisparityMap {
    /// Disparity samples shaped `(height, width)`
    pub values: Array2<f32>,
}

impl DisparityMap {
    pub fn width(&self) -> usize {
        self.values.dim().1
    }

    pub fn height(&self) -> usize {
        self.values.dim().0
    }
}
