//! # Store Messages
//!
//! Requests sent from [`StoreClient`](super::StoreClient) to
//! [`StoreActor`](super::StoreActor).

use super::command::Command;
use super::state::CollectionState;
use crate::model::{User, UserDraft, UserId};
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the store actor.
#[derive(Debug)]
pub enum StoreRequest {
    /// Apply one command and acknowledge once the new state is published.
    Dispatch {
        command: Command,
        respond_to: Response<()>,
    },
    /// Read a copy of the current state.
    Snapshot {
        respond_to: Response<CollectionState>,
    },
    /// Build a record from a draft with a locally generated id and prepend it.
    Create {
        draft: UserDraft,
        respond_to: Response<UserId>,
    },
    /// Lay a draft over the record with `id` in one step. Answers with the
    /// updated record, or `None` when no record has that id.
    Edit {
        id: UserId,
        draft: UserDraft,
        respond_to: Response<Option<User>>,
    },
    /// Stop the actor. Requests still queued behind this one are dropped.
    Close,
}
