//! # Store Errors
//!
//! Failures of the channel plumbing between clients and the store actor.
//! Applying a command never fails by itself.

/// Fixed message reported when a client is used without a running store behind it.
pub const NO_STORE_MESSAGE: &str = "user store accessed outside a running store";

/// Errors raised by [`StoreClient`](super::StoreClient).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store actor is not running (never started, closed, or shut down).
    #[error("user store accessed outside a running store")]
    Unavailable,
    /// The store accepted the request but went away before answering.
    #[error("user store dropped the response")]
    Dropped,
}
