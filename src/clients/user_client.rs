//! # User Client
//!
//! Provides the view layer's API over the collection store. It wraps a
//! [`StoreClient`] and adds form validation in front of the mutating commands.
//! Drafts are trimmed before they are validated and stored.
use crate::clients::UserError;
use crate::form::{self, FormMode};
use crate::model::{User, UserDraft, UserId};
use crate::store::{CollectionState, Command, StoreClient};
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Client handed to every consumer of the user collection.
#[derive(Clone)]
pub struct UserClient {
    inner: StoreClient,
}

impl UserClient {
    pub fn new(inner: StoreClient) -> Self {
        Self { inner }
    }

    /// The raw store client, for dispatching commands directly.
    pub fn store(&self) -> &StoreClient {
        &self.inner
    }

    /// Current `{users, loading, error}`.
    pub async fn state(&self) -> Result<CollectionState, UserError> {
        Ok(self.inner.state().await?)
    }

    pub fn subscribe(&self) -> watch::Receiver<CollectionState> {
        self.inner.subscribe()
    }

    pub async fn users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.state().await?.users)
    }

    pub async fn get(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.state().await?.find(id).cloned())
    }

    /// Validates `draft` and prepends it as a new record.
    #[instrument(skip(self))]
    pub async fn add_user(&self, draft: UserDraft) -> Result<UserId, UserError> {
        debug!("Sending request");
        let draft = draft.trimmed();
        form::validate(&draft)?;
        let id = self.inner.create(draft).await?;
        info!(id, "User added");
        Ok(id)
    }

    /// Validates `draft` and lays it over the record with `id`.
    ///
    /// Fails with [`UserError::NotFound`] when the record is absent at the
    /// moment the store applies the edit.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, UserError> {
        debug!("Sending request");
        let draft = draft.trimmed();
        form::validate(&draft)?;
        let updated = self
            .inner
            .edit(id, draft)
            .await?
            .ok_or(UserError::NotFound(id))?;
        info!(id, "User updated");
        Ok(updated)
    }

    /// Removes the record with `id`. Unknown ids are not an error.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.dispatch(Command::DeleteUser(id)).await?;
        Ok(())
    }

    /// Handles the form's confirm button and returns the success notice.
    pub async fn submit(
        &self,
        mode: FormMode,
        draft: UserDraft,
    ) -> Result<&'static str, UserError> {
        match mode {
            FormMode::Add => {
                self.add_user(draft).await?;
            }
            FormMode::Edit(id) => {
                self.update_user(id, draft).await?;
            }
        }
        Ok(mode.success_notice())
    }
}
