use serde::{Deserialize, Serialize};

/// Identifier of a [`User`] inside the collection.
pub type UserId = u64;

/// Builds the avatar URL for a user. The remote source never decides this.
pub fn avatar_url_for(id: UserId) -> String {
    format!("https://picsum.photos/seed/{id}/80/80")
}

/// Represents one user profile held by the collection store.
///
/// The `id` is assigned by the data source on initial load or generated
/// locally on creation, and never changes afterwards. `avatar_url` is always
/// derived from `id` via [`avatar_url_for`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub avatar_url: String,
    pub address: Address,
    pub company: Company,
}

/// Postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

impl Address {
    /// Single-line form used by the detail view.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.suite, self.city, self.zipcode
        )
    }
}

/// Employer of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Editable fields of a user, as produced by the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl UserDraft {
    /// Creates a draft with the three required fields set.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Strips surrounding whitespace from every field.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            website: self.website.trim().to_string(),
        }
    }
}

impl User {
    /// Creates a new record from a draft.
    ///
    /// # Notes
    /// Address and company start out empty; the avatar is derived from `id`.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            username: draft.username,
            email: draft.email,
            phone: draft.phone,
            website: draft.website,
            avatar_url: avatar_url_for(id),
            address: Address::default(),
            company: Company::default(),
        }
    }

    /// Returns a copy of this record with the draft's fields laid over it.
    ///
    /// `id`, `avatar_url`, `address` and `company` are kept.
    pub fn with_draft(&self, draft: UserDraft) -> Self {
        Self {
            name: draft.name,
            username: draft.username,
            email: draft.email,
            phone: draft.phone,
            website: draft.website,
            ..self.clone()
        }
    }

    /// Extracts the editable fields, e.g. to prefill the edit form.
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
        }
    }

    /// Gives the record a new id and re-derives its avatar.
    pub(crate) fn renumbered(self, id: UserId) -> Self {
        Self {
            id,
            avatar_url: avatar_url_for(id),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_derives_avatar_and_empty_sub_records() {
        let draft = UserDraft::new("Alice", "alice", "alice@example.com");
        let user = User::from_draft(3, draft);

        assert_eq!(user.avatar_url, "https://picsum.photos/seed/3/80/80");
        assert_eq!(user.address, Address::default());
        assert_eq!(user.company, Company::default());
    }

    #[test]
    fn test_with_draft_keeps_identity_and_sub_records() {
        let mut user = User::from_draft(9, UserDraft::new("Bob", "bob", "bob@example.com"));
        user.address.city = "Gwenborough".to_string();

        let edited = user.with_draft(UserDraft {
            phone: "555".to_string(),
            ..UserDraft::new("Robert", "rob", "rob@example.com")
        });

        assert_eq!(edited.id, 9);
        assert_eq!(edited.name, "Robert");
        assert_eq!(edited.phone, "555");
        assert_eq!(edited.address.city, "Gwenborough");
        assert_eq!(edited.avatar_url, user.avatar_url);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let user = User::from_draft(1, UserDraft::new("A", "a", "a@b.co"));
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["avatarUrl"], "https://picsum.photos/seed/1/80/80");
        assert!(json["company"].get("catchPhrase").is_some());
    }

    #[test]
    fn test_address_one_line() {
        let address = Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        };
        assert_eq!(address.one_line(), "Kulas Light, Apt. 556, Gwenborough 92998-3874");
    }
}
