use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be a positive integer or 'original'")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Invalid reference color: {value}. Expected R,G,B with each channel 0-255")]
    InvalidColor { value: String },

    #[error("Duration must be positive, got: {duration}")]
    InvalidDuration { duration: f64 },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lib(#[from] spritenorm::Error),
}
