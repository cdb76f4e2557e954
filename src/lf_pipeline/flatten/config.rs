//! Flattening configuration types

/// Configuration shared by both dataset drivers
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Number of views to keep; must be a perfect square
    pub target_n_sai: usize,
    /// Side of the centered square crop applied to every view, which is also
    /// the mosaic tile size
    pub img_size: usize,
    /// File extension of the sub-aperture images (e.g. "png")
    pub img_format: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            target_n_sai: 49,
            img_size: 420,
            img_format: "png".to_string(),
        }
    }
}

impl StackConfig {
    pub fn builder() -> StackConfigBuilder {
        StackConfigBuilder::default()
    }
}

/// Builder for StackConfig
#[derive(Default)]
pub struct StackConfigBuilder {
    target_n_sai: Option<usize>,
    img_size: Option<usize>,
    img_format: Option<String>,
}

impl StackConfigBuilder {
    pub fn target_n_sai(mut self, target_n_sai: usize) -> Self {
        self.target_n_sai = Some(target_n_sai);
        self
    }

    pub fn img_size(mut self, img_size: usize) -> Self {
        self.img_size = Some(img_size);
        self
    }

    pub fn img_format(mut self, img_format: impl Into<String>) -> Self {
        self.img_format = Some(img_format.into());
        self
    }

    pub fn build(self) -> StackConfig {
        let default = StackConfig::default();
        StackConfig {
            target_n_sai: self.target_n_sai.unwrap_or(default.target_n_sai),
            img_size: self.img_size.unwrap_or(default.img_size),
            img_format: self.img_format.unwrap_or(default.img_format),
        }
    }
}
