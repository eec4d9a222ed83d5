use thiserror::Error;

/// Validation failures reported by an [`Account`](crate::domain::account::Account).
///
/// All of them are recoverable: the account is left untouched and the caller
/// decides what to do with the message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("Please enter a number")]
    InvalidInput,
    #[error("You cannot deposit a negative amount")]
    NonPositiveAmount,
    #[error("You do not have enough funds to process this transaction")]
    InsufficientFunds,
    #[error("This deposit would exceed the largest balance the account can hold")]
    BalanceOverflow,
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed row: {0}")]
    MalformedRow(String),
    #[error(transparent)]
    Rejected(#[from] AccountError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
