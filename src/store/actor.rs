//! # Store Actor
//!
//! The server half of the collection store. It owns [`CollectionState`] and the
//! receiving end of the request channel, and processes requests one at a time,
//! so no reader ever observes a partially applied command.

use super::client::StoreClient;
use super::command::Command;
use super::message::StoreRequest;
use super::reducer::{Reducer, UserReducer};
use super::state::CollectionState;
use crate::model::User;
use std::collections::HashSet;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The actor that manages the user collection.
///
/// **Concurrency Model**:
/// All mutation goes through [`StoreActor::run`], which handles each request to
/// completion before taking the next one. The state needs no `Mutex`; the task
/// owns it exclusively. After every command the whole new state is published on
/// a `watch` channel for subscribers.
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    state: CollectionState,
    publisher: watch::Sender<CollectionState>,
}

impl StoreActor {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When full, client calls
    ///   wait until there is space.
    ///
    /// # Returns
    ///
    /// 1. The actor, which must be driven with `.run()`.
    /// 2. A cloneable client for sending commands and reading state.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(CollectionState::default());
        let actor = Self {
            receiver,
            state: CollectionState::default(),
            publisher,
        };
        (actor, StoreClient::new(sender, watcher))
    }

    /// Runs the event loop until every client is dropped or `Close` arrives.
    pub async fn run(mut self) {
        info!("Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch {
                    command,
                    respond_to,
                } => {
                    self.apply(command);
                    let _ = respond_to.send(());
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(size = self.state.users.len(), "Snapshot");
                    let _ = respond_to.send(self.state.clone());
                }
                StoreRequest::Create { draft, respond_to } => {
                    let id = self.state.next_id();
                    debug!(id, ?draft, "Create");
                    self.apply(Command::AddUser(User::from_draft(id, draft)));
                    let _ = respond_to.send(id);
                }
                StoreRequest::Edit {
                    id,
                    draft,
                    respond_to,
                } => {
                    let updated = self.state.find(id).map(|user| user.with_draft(draft));
                    match &updated {
                        Some(user) => self.apply(Command::UpdateUser(user.clone())),
                        None => debug!(id, "Edit of unknown user"),
                    }
                    let _ = respond_to.send(updated);
                }
                StoreRequest::Close => {
                    info!("Close requested");
                    break;
                }
            }
        }

        info!(size = self.state.users.len(), "Shutdown");
    }

    fn apply(&mut self, command: Command) {
        let name = command.name();
        match &command {
            Command::AddUser(user) if self.state.contains(user.id) => {
                warn!(
                    id = user.id,
                    next = self.state.next_id(),
                    "Id already taken, renumbering"
                );
            }
            Command::SetUsers(users) => {
                let distinct: HashSet<_> = users.iter().map(|u| u.id).collect();
                if distinct.len() < users.len() {
                    warn!(
                        repeated = users.len() - distinct.len(),
                        "Loaded list repeats ids, renumbering"
                    );
                }
            }
            _ => {}
        }
        debug!(command = name, "Dispatch");

        let state = std::mem::take(&mut self.state);
        self.state = UserReducer::reduce(state, command);
        self.publisher.send_replace(self.state.clone());

        info!(
            command = name,
            size = self.state.users.len(),
            loading = self.state.loading,
            "Applied"
        );
    }
}
