use thiserror::Error;

#[derive(Error, Debug)]
pub enum PennyError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown transaction: {0}")]
    UnknownTransaction(i64),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid time (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("{0}")]
    Validation(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PennyError>;
