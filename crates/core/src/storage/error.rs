use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Absence of a record is not an error; lookups return `Ok(None)` and
/// searches return an empty list. The variants here cover the remaining
/// taxonomy: arguments rejected before any I/O, store/transport failures,
/// and stored records that violate the write-path contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
