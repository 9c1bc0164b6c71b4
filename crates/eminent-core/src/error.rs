//! Error types for the Eminent site core

use thiserror::Error;

use crate::types::QuoteField;

/// Main error type for site core operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// One or more required form fields are empty
    #[error("Required field(s) missing: {}", .0.iter().map(|f| f.label()).collect::<Vec<_>>().join(", "))]
    Validation(Vec<QuoteField>),

    /// Email does not match the expected shape
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// A submission is already in flight
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// The submit collaborator reported a failure
    #[error("Submission failed: {0}")]
    Submission(String),

    /// The submit collaborator did not respond within the bounded wait
    #[error("Submission timed out")]
    SubmissionTimeout,

    /// Error during storage operations
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SiteError {
    /// Whether this error came from the durable storage layer.
    ///
    /// Consent and theme controllers degrade to in-memory behavior on
    /// these instead of surfacing them to the user.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            SiteError::Storage(_)
                | SiteError::Database(_)
                | SiteError::Transaction(_)
                | SiteError::Table(_)
                | SiteError::StorageOp(_)
                | SiteError::Commit(_)
                | SiteError::Io(_)
        )
    }
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
