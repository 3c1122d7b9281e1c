//! Error types for the user data source.

use thiserror::Error;

/// Errors that can occur while fetching users.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The endpoint answered with a non-success status.
    #[error("Failed to get user list")]
    Status { status: u16 },

    /// The request never produced a response (connection refused, DNS, timeout, ...).
    /// The message is the transport's own.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The body was not the expected JSON shape.
    #[error("{0}")]
    Decode(String),

    /// A scripted failure from a stub source.
    #[error("{0}")]
    Other(String),
}
