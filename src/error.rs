//! Error Types
//!
//! Input validation and durable-storage failures. Both are recoverable:
//! the list is never left half-mutated when one of these is returned.

use thiserror::Error;

/// The item name was empty after trimming
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Please enter the item name")]
pub struct EmptyNameError;

/// Failures of the string-keyed durable store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage is not available: {0}")]
    Unavailable(String),

    #[error("Local storage rejected the write: {0}")]
    WriteRejected(String),

    #[error("Saved list is corrupted: {0}")]
    Malformed(String),
}

/// Any failure a list command can report to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error(transparent)]
    EmptyName(#[from] EmptyNameError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type StorageResult<T> = Result<T, StorageError>;
