//! Error type for the employee page.
//!
//! The page has a single failure mode: the read query against the remote
//! store did not settle successfully. The store client's message is carried
//! verbatim and ends up as page text, so `Display` adds no prefix of its own.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The read query against the remote store failed.
    #[error("{0}")]
    FetchFailed(String),
}

impl FetchError {
    pub fn fetch_failed(msg: impl Into<String>) -> Self {
        Self::FetchFailed(msg.into())
    }

    /// The human-readable message as received from the store client.
    pub fn message(&self) -> &str {
        match self {
            Self::FetchFailed(msg) => msg,
        }
    }
}

impl From<sqlx::Error> for FetchError {
    fn from(e: sqlx::Error) -> Self {
        Self::FetchFailed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
