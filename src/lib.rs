pub mod lf_pipeline;
pub mod logger;
