use thiserror::Error;

/// Why a single feed row was skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("amount is empty")]
    MissingAmount,
    #[error("amount `{0}` must start with `+` or `-` and contain a number")]
    UnsignedAmount(String),
    #[error("date `{0}` is not YYYY-MM-DD")]
    InvalidDate(String),
}
