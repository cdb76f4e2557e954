//! Driver for grid-of-views datasets (HCI layout).
//!
//! All sub-aperture images of one scene live as individual files somewhere
//! under one directory. Walking them in lexicographic path order visits the
//! views in row-major angular order, so the running file index doubles as the
//! view index.

use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{info, instrument, warn};

use crate::lf_pipeline::{
    common::error::{Result, StackError},
    flatten::config::StackConfig,
    mosaic::{LfiBuffer, MosaicWriter, StandardMosaicWriter},
    sai::{crop_sai, select_sai_range, SaiReader, StandardSaiReader},
};

pub struct HciFlattener<R: SaiReader, W: MosaicWriter> {
    reader: R,
    writer: W,
    config: StackConfig,
}

impl HciFlattener<StandardSaiReader, StandardMosaicWriter> {
    pub fn new(config: StackConfig) -> Self {
        Self {
            reader: StandardSaiReader,
            writer: StandardMosaicWriter,
            config,
        }
    }
}

impl<R: SaiReader, W: MosaicWriter> HciFlattener<R, W> {
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

    /// Stacks the centered `target_n_sai` views found under `read_dir` into
    /// `save_dir/name`, creating `save_dir` if needed.
    ///
    /// `n_sai` is the dataset's total view count and determines which slice
    /// of the sorted file list is kept.
    #[instrument(skip(self, read_dir, save_dir))]
    pub fn flatten(
        &self,
        read_dir: &Path,
        save_dir: &Path,
        n_sai: usize,
        name: &str,
    ) -> Result<PathBuf> {
        let range = select_sai_range(n_sai, self.config.target_n_sai)?;
        info!(left = range.left(), right = range.right(), "Selected view range");

        let paths = self.discover_views(read_dir)?;
        if paths.len() != n_sai {
            warn!(
                found = paths.len(),
                n_sai, "View count on disk differs from configured total"
            );
        }
        if paths.len() <= range.right() {
            return Err(StackError::InvalidRange(format!(
                "found {} views under {}, need at least {}",
                paths.len(),
                read_dir.display(),
                range.right() + 1
            )));
        }

        std::fs::create_dir_all(save_dir)?;

        let mut lfi = LfiBuffer::new(self.config.target_n_sai, self.config.img_size)?;
        for (view, path) in paths.iter().enumerate() {
            if view < range.left() {
                continue;
            }
            if view > range.right() {
                break;
            }

            let sai = self.reader.read_sai(path)?;
            let sai = crop_sai(&sai, self.config.img_size)?;
            lfi.place(range.offset(view), &sai)?;
        }

        let mosaic = lfi.into_mosaic()?;
        let out_path = save_dir.join(name);
        self.writer.write_mosaic(&mosaic, &out_path)?;

        info!(path = %out_path.display(), "Stacked LFI saved");
        Ok(out_path)
    }

    /// All view images under `read_dir`, recursively, in lexicographic order.
    fn discover_views(&self, read_dir: &Path) -> Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/**/*.{}",
            read_dir.display(),
            self.config.img_format
        );
        let entries = glob(&pattern).map_err(|e| {
            StackError::InputReadError(format!("bad glob pattern {}: {}", pattern, e))
        })?;

        let mut paths = entries
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| StackError::InputReadError(e.to_string()))?;
        paths.sort();
        Ok(paths)
    }
}
