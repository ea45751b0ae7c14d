use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockrecError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("catalog store error: {0}")]
    Store(String),
    #[error("malformed document: {0}")]
    Document(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, StockrecError>;
