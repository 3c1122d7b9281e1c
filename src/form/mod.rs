//! # Create/Edit Form
//!
//! Client-side validation that runs before `AddUser` or `UpdateUser` is issued,
//! plus the labels the form dialog shows for each mode.

pub mod validation;

pub use validation::*;

use crate::model::UserId;

/// Which dialog the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(UserId),
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Add New User",
            FormMode::Edit(_) => "Edit User",
        }
    }

    /// Label of the confirm button.
    pub fn ok_text(self) -> &'static str {
        match self {
            FormMode::Add => "Add",
            FormMode::Edit(_) => "Save",
        }
    }

    /// Notice shown once the command has been applied.
    pub fn success_notice(self) -> &'static str {
        match self {
            FormMode::Add => "User added",
            FormMode::Edit(_) => "User updated",
        }
    }
}
