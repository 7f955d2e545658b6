use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: {0}")]
    Parse(#[from] rust_decimal::Error),
    #[error("Monetary error: Value [{0}] is negative")]
    Negative(String),
    #[error("Monetary error: Overflow")]
    Overflow
}
