//! Engine error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BingoError>;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("Cell reference out of range: column {col}, row {row}")]
    OutOfRange { col: usize, row: usize },

    #[error("Invalid session config: {0}")]
    InvalidConfig(String),

    #[error("Snapshot encoding error: {0}")]
    Serialization(#[from] bincode::Error),
}
