//! # Mock Store
//!
//! Utilities for testing store consumers without spawning a [`StoreActor`](super::StoreActor).
//!
//! Use [`create_mock_client`] to get a client and the receiver its requests
//! land on, then answer them with [`expect_dispatch`], [`expect_snapshot`],
//! [`expect_create`] or [`expect_edit`].

use super::client::StoreClient;
use super::command::Command;
use super::message::StoreRequest;
use super::state::CollectionState;
use crate::model::{User, UserDraft, UserId};
use tokio::sync::{mpsc, oneshot, watch};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client's `subscribe()` sees `initial` forever; nothing publishes to it.
pub fn create_mock_client(
    buffer_size: usize,
    initial: CollectionState,
) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, watcher) = watch::channel(initial);
    (StoreClient::new(sender, watcher), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(Command, oneshot::Sender<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<oneshot::Sender<CollectionState>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(UserDraft, oneshot::Sender<UserId>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Edit request
pub async fn expect_edit(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(UserId, UserDraft, oneshot::Sender<Option<User>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Edit {
            id,
            draft,
            respond_to,
        }) => Some((id, draft, respond_to)),
        _ => None,
    }
}
