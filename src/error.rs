use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpendlogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown category: {0} (run `spendlog categories` for the list)")]
    UnknownCategory(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, SpendlogError>;
