//! Error types for the user client.

use crate::form::ValidationErrors;
use crate::model::UserId;
use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The form input failed validation; nothing was dispatched.
    #[error("User validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The record to edit is not in the collection.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// The store could not be reached.
    #[error(transparent)]
    Store(#[from] StoreError),
}
