//! # Store Commands
//!
//! The closed set of mutations the store accepts. Every command is applied by
//! [`UserReducer`](super::UserReducer) in a single exhaustive match.

use crate::model::{User, UserId};

/// A mutation request for the collection store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the whole list, keeping the given order.
    SetUsers(Vec<User>),
    /// Prepend a record. A colliding id is renumbered to one past the current maximum.
    AddUser(User),
    /// Replace the record with the same id. Unknown ids leave the list unchanged.
    UpdateUser(User),
    /// Remove the record with this id. Unknown ids leave the list unchanged.
    DeleteUser(UserId),
    SetLoading(bool),
    SetError(Option<String>),
}

impl Command {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetUsers(_) => "SetUsers",
            Command::AddUser(_) => "AddUser",
            Command::UpdateUser(_) => "UpdateUser",
            Command::DeleteUser(_) => "DeleteUser",
            Command::SetLoading(_) => "SetLoading",
            Command::SetError(_) => "SetError",
        }
    }
}
