//! # Load Lifecycle
//!
//! The one asynchronous step of the store: populate it once from a
//! [`UserSource`] right after it is created.
//!
//! The sequence is always `SetLoading(true)`, then `SetUsers` or `SetError`,
//! then `SetLoading(false)`. Each dispatch is its own transition, so commands
//! issued by the view while the fetch is pending interleave between them
//! without tearing. Nothing is retried.
//!
//! If the store has gone away by the time the fetch resolves, the late writes
//! are dropped and the outcome is [`LoadOutcome::Detached`].

use super::client::StoreClient;
use super::command::Command;
use super::error::StoreError;
use crate::source::UserSource;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// How a load run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store now holds this many users.
    Loaded(usize),
    /// The fetch failed; the store's `error` holds this message.
    Failed(String),
    /// The store stopped before the run could finish writing.
    Detached,
}

/// Runs the load lifecycle against `store`.
#[instrument(skip_all)]
pub async fn load_users<S>(store: &StoreClient, source: &S) -> LoadOutcome
where
    S: UserSource + ?Sized,
{
    match run(store, source).await {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!(error = %e, "Store gone, dropping load result");
            LoadOutcome::Detached
        }
    }
}

/// Spawns [`load_users`] on the runtime.
pub fn spawn_loader(store: StoreClient, source: Arc<dyn UserSource>) -> JoinHandle<LoadOutcome> {
    tokio::spawn(async move { load_users(&store, source.as_ref()).await })
}

async fn run<S>(store: &StoreClient, source: &S) -> Result<LoadOutcome, StoreError>
where
    S: UserSource + ?Sized,
{
    store.dispatch(Command::SetLoading(true)).await?;

    let outcome = match source.fetch_users().await {
        Ok(users) => {
            let count = users.len();
            store.dispatch(Command::SetUsers(users)).await?;
            info!(count, "Users loaded");
            LoadOutcome::Loaded(count)
        }
        Err(e) => {
            let message = e.to_string();
            warn!(error = %message, "Load failed");
            store.dispatch(Command::SetError(Some(message.clone()))).await?;
            LoadOutcome::Failed(message)
        }
    };

    store.dispatch(Command::SetLoading(false)).await?;
    Ok(outcome)
}
