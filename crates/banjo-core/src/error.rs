use thiserror::Error;

pub type Result<T> = std::result::Result<T, BanjoError>;

#[derive(Debug, Error)]
pub enum BanjoError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
