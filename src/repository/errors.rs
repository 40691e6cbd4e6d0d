use thiserror::Error;

/// Failures talking to the scraping backend.
///
/// `Transport` and `Decode` are both network-level failures from the user's
/// point of view; `Unsuccessful` is the backend answering `success: false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The request could not be sent or the connection failed.
    #[error("backend unreachable: {0}")]
    Transport(String),
    /// The body was not a parseable envelope.
    #[error("malformed backend response: {0}")]
    Decode(String),
    /// The envelope carried `success: false`.
    #[error("backend reported failure: {0}")]
    Unsuccessful(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
