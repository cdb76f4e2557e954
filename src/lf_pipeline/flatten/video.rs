//! Driver for multi-frame video datasets with disparity maps (Sintel-style).
//!
//! Each view has its own `0X_0Y/` subfolder holding one image and one `.npy`
//! disparity map per frame. One run flattens a single frame: the selected
//! views are stacked into a mosaic, their disparity maps into a parallel
//! 4-D stack, and the center view's disparity map is copied out uncropped.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::lf_pipeline::{
    common::error::{Result, StackError},
    flatten::config::StackConfig,
    mosaic::{DisparityBuffer, LfiBuffer, MosaicWriter, StandardMosaicWriter},
    sai::{crop_disparity, crop_sai, select_sai_range, SaiReader, StandardSaiReader},
};

/// Side of the nominal angular grid; view `k` lives in folder
/// `0{k/9}_0{k%9}`.
pub const ANGULAR_DIM: usize = 9;

/// Grid coordinates of the dataset's designated center view (folder `04_04`).
const CENTER_VIEW: (usize, usize) = (4, 4);

/// Paths written by one video flattening run.
#[derive(Debug, Clone)]
pub struct VideoOutputs {
    pub mosaic: PathBuf,
    pub disparity_stack: PathBuf,
    /// Present when the center view fell inside the selected range.
    pub center_disparity: Option<PathBuf>,
}

pub struct VideoFlattener<R: SaiReader, W: MosaicWriter> {
    reader: R,
    writer: W,
    config: StackConfig,
}

impl VideoFlattener<StandardSaiReader, StandardMosaicWriter> {
    pub fn new(config: StackConfig) -> Self {
        Self {
            reader: StandardSaiReader,
            writer: StandardMosaicWriter,
            config,
        }
    }
}

impl<R: SaiReader, W: MosaicWriter> VideoFlattener<R, W> {
    pub fn with_custom(reader: R, writer: W, config: StackConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Flattens frame `frame` of the scene at `read_dir` into `save_dir`.
    ///
    /// Writes `<frame>_stacked.<ext>`, `<frame>_stacked.npy` and, when the
    /// center view is selected, `<frame>_center.npy`.
    #[instrument(skip(self, read_dir, save_dir))]
    pub fn flatten(
        &self,
        read_dir: &Path,
        save_dir: &Path,
        n_sai: usize,
        frame: &str,
    ) -> Result<VideoOutputs> {
        if n_sai > ANGULAR_DIM * ANGULAR_DIM {
            return Err(StackError::InvalidRange(format!(
                "total view count {} exceeds the {}x{} angular grid",
                n_sai, ANGULAR_DIM, ANGULAR_DIM
            )));
        }

        let range = select_sai_range(n_sai, self.config.target_n_sai)?;
        info!(left = range.left(), right = range.right(), frame, "Selected view range");

        std::fs::create_dir_all(save_dir)?;

        let mut lfi = LfiBuffer::new(self.config.target_n_sai, self.config.img_size)?;
        let mut disps = DisparityBuffer::new(self.config.target_n_sai, self.config.img_size)?;
        let mut center_disparity = None;

        for view in range.iter() {
            // Folder coordinates follow directly from the view index, so the
            // grid cell and the folder can never drift apart.
            let (view_x, view_y) = (view / ANGULAR_DIM, view % ANGULAR_DIM);
            let folder = read_dir.join(format!("0{}_0{}", view_x, view_y));

            let img_path = folder.join(format!("{}.{}", frame, self.config.img_format));
            let sai = self.reader.read_sai(&img_path)?;
            let sai = crop_sai(&sai, self.config.img_size)?;
            lfi.place(range.offset(view), &sai)?;

            let disp_path = folder.join(format!("{}.npy", frame));
            let disp = self.reader.read_disparity(&disp_path)?;

            if (view_x, view_y) == CENTER_VIEW {
                let center_path = save_dir.join(format!("{}_center.npy", frame));
                self.writer.write_disparity(&disp, &center_path)?;
                center_disparity = Some(center_path);
            }

            let disp = crop_disparity(&disp, self.config.img_size)?;
            disps.place(range.offset(view), &disp)?;
        }

        let mosaic_path = save_dir.join(format!("{}_stacked.{}", frame, self.config.img_format));
        let mosaic = lfi.into_mosaic()?;
        self.writer.write_mosaic(&mosaic, &mosaic_path)?;

        let stack_path = save_dir.join(format!("{}_stacked.npy", frame));
        let stack = disps.into_stack()?;
        self.writer.write_disparity_stack(&stack, &stack_path)?;

        info!(
            mosaic = %mosaic_path.display(),
            stack = %stack_path.display(),
            "Frame flattened"
        );

        Ok(VideoOutputs {
            mosaic: mosaic_path,
            disparity_stack: stack_path,
            center_disparity,
        })
    }
}
