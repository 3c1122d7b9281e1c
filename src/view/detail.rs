//! Detail card for a single user.

use crate::model::User;
use std::fmt;

/// Read-only rendering of one [`User`].
pub struct DetailView<'a> {
    user: &'a User,
}

impl<'a> DetailView<'a> {
    pub fn new(user: &'a User) -> Self {
        Self { user }
    }

    pub fn title(&self) -> String {
        format!("{}'s Details", self.user.name)
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let user = self.user;
        vec![
            ("Username", user.username.clone()),
            ("E-mail", user.email.clone()),
            ("Phone", user.phone.clone()),
            ("Website", user.website.clone()),
            ("Company", user.company.name.clone()),
            ("Address", user.address.one_line()),
        ]
    }
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "[avatar {}]", self.user.avatar_url)?;
        for (label, value) in self.rows() {
            writeln!(f, "{label:<10} {value}")?;
        }
        Ok(())
    }
}
