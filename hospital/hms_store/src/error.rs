use std::io;
use std::path::PathBuf;

/// Why a persisted row could not be turned back into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("too many fields: expected {expected}, found {found}")]
    TooManyFields { expected: usize, found: usize },

    #[error("field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field '{field}' has unknown value '{value}'")]
    UnknownLabel { field: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create data directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
}
