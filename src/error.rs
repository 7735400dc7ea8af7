use thiserror::Error;

#[derive(Error, Debug)]
pub enum DcgpError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Input size error: {0}")]
    InputSize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DcgpError>;
