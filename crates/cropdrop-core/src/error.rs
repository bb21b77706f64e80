use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropDropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Crop region is empty")]
    EmptyCrop,

    #[error("Crop of {width}x{height} is too large; zoom in further")]
    CropTooLarge { width: u32, height: u32 },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CropDropError>;
