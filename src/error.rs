//! Error taxonomy for the expense tracker.
//!
//! Every validation or precondition failure maps to exit code 2. Storage
//! failures are fatal and map to exit code 1.

use std::path::PathBuf;
use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, ExpenseError>;

#[derive(Error, Debug)]
pub(crate) enum ExpenseError {
    #[error("database not found at {}. Run: expense-tracker init", .0.display())]
    NotInitialized(PathBuf),

    #[error("--amount must be a number like 12.50 (got '{0}')")]
    InvalidAmount(String),

    #[error("--amount must be > 0 (got '{0}')")]
    NonPositiveAmount(String),

    #[error("--date must be a real date in YYYY-MM-DD format (got '{0}')")]
    InvalidDate(String),

    #[error("--month must be in YYYY-MM format (got '{0}')")]
    InvalidMonth(String),

    #[error("--category must not be empty")]
    EmptyCategory,

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
}

/// Underlying cause of a storage failure.
#[derive(Error, Debug)]
pub(crate) enum StorageError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(e: rusqlite::Error) -> Self {
        Self::StorageUnavailable(StorageError::Sqlite(e))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(e: std::io::Error) -> Self {
        Self::StorageUnavailable(StorageError::Io(e))
    }
}

impl ExpenseError {
    /// Process exit code for this failure.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::StorageUnavailable(_) => 1,
            _ => 2,
        }
    }

    /// True for input and precondition failures the user can fix by
    /// re-running with different arguments.
    pub(crate) fn is_user_error(&self) -> bool {
        !matches!(self, Self::StorageUnavailable(_))
    }
}
