//! Field rules for the user form.
//!
//! | Field | Rule | Message |
//! |---|---|---|
//! | name | required | `Enter your name` |
//! | username | required | `Enter desired username` |
//! | email | required, email shape | `Enter valid email` |
//!
//! Phone and website are free text. Whitespace-only input counts as missing.

use crate::model::UserDraft;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A validated field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Username,
    Email,
}

impl Field {
    /// The message shown under the field when its rule fails.
    pub fn message(self) -> &'static str {
        match self {
            Field::Name => "Enter your name",
            Field::Username => "Enter desired username",
            Field::Email => "Enter valid email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Username => "Username",
            Field::Email => "Email",
        }
    }
}

/// Every field that failed, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<Field>,
}

impl ValidationErrors {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Message for `field`, if it failed.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| **f == field)
            .map(|f| f.message())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.fields.iter().map(|field| field.message()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Returns true when `value` has the shape `local@domain.tld`.
///
/// Surrounding whitespace is not accepted; trim the draft first.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Checks a draft against the form rules.
///
/// Fields are checked as given. [`UserClient`](crate::clients::UserClient)
/// trims drafts with [`UserDraft::trimmed`] before calling this.
pub fn validate(draft: &UserDraft) -> Result<(), ValidationErrors> {
    let mut fields = Vec::new();
    if draft.name.trim().is_empty() {
        fields.push(Field::Name);
    }
    if draft.username.trim().is_empty() {
        fields.push(Field::Username);
    }
    if !is_valid_email(&draft.email) {
        fields.push(Field::Email);
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { fields })
    }
}
