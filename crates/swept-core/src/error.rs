use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweptError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SweptError>;
