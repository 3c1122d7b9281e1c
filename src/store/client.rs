//! # Store Client
//!
//! The handle consumers hold to talk to a [`StoreActor`](super::StoreActor).

use super::command::Command;
use super::error::StoreError;
use super::message::StoreRequest;
use super::state::CollectionState;
use crate::model::{User, UserDraft, UserId};
use tokio::sync::{mpsc, oneshot, watch};

/// A cloneable, async handle to the collection store.
///
/// It holds only a channel sender and a `watch` receiver, so cloning is cheap
/// and clones can be handed to every consumer that needs the store.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
    watcher: watch::Receiver<CollectionState>,
}

impl StoreClient {
    pub fn new(
        sender: mpsc::Sender<StoreRequest>,
        watcher: watch::Receiver<CollectionState>,
    ) -> Self {
        Self { sender, watcher }
    }

    /// Applies `command` and waits until the new state is published.
    pub async fn dispatch(&self, command: Command) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch {
                command,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    /// Reads the current state.
    pub async fn state(&self) -> Result<CollectionState, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    /// Prepends a new record built from `draft` and returns its generated id.
    pub async fn create(&self, draft: UserDraft) -> Result<UserId, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { draft, respond_to })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    /// Lays `draft` over the record with `id` and returns the result.
    ///
    /// Lookup and update happen in one actor step, so `None` means the record
    /// was absent at that moment and nothing changed.
    pub async fn edit(&self, id: UserId, draft: UserDraft) -> Result<Option<User>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Edit {
                id,
                draft,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    /// Asks the actor to stop. Requests queued after this are never answered.
    pub async fn close(&self) -> Result<(), StoreError> {
        self.sender
            .send(StoreRequest::Close)
            .await
            .map_err(|_| StoreError::Unavailable)
    }

    /// Receiver that yields every published state.
    pub fn subscribe(&self) -> watch::Receiver<CollectionState> {
        self.watcher.clone()
    }

    /// False once the actor has stopped.
    pub fn is_running(&self) -> bool {
        !self.sender.is_closed()
    }
}
