use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Invalid view range: {0}")]
    InvalidRange(String),

    #[error("Image too small: {0}x{1} is smaller than crop size {2}")]
    ImageTooSmall(usize, usize, usize),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StackError>;
